use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use redirect_map::batch::{batch_count, process_batch, DEFAULT_BATCH_SIZE};
use redirect_map::encoding::read_urls;
use redirect_map::models::RunStats;
use redirect_map::progress::{create_progress_bar, format_duration, set_log_only};
use redirect_map::safety::validate_output_dir;

#[derive(Parser)]
#[command(name = "redirect-map")]
#[command(about = "Map new URLs to their closest old URLs for redirect planning")]
struct Args {
    /// CSV of old URLs (candidate corpus, first column)
    #[arg(long, default_value = "oldurl.csv")]
    old: PathBuf,

    /// CSV of new URLs to map (first column)
    #[arg(long, default_value = "newurl.csv")]
    new: PathBuf,

    /// Directory for per-batch output CSVs
    #[arg(long, default_value = "url_mapping_batches")]
    output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Hide progress bars; per-URL status goes to stderr (tail-friendly)
    #[arg(long)]
    log_only: bool,

    /// Write run statistics to a JSON file
    #[arg(long)]
    stats: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.batch_size == 0 {
        bail!("batch size must be a positive integer");
    }
    set_log_only(args.log_only);
    validate_output_dir(&args.output, &[&args.old, &args.new])?;

    let start = Instant::now();

    // Both inputs are read in full before any batch runs, so an input error
    // aborts before anything is written.
    let (old_urls, old_encoding) = read_urls(&args.old)?;
    println!(
        "Read {} old URLs from {} (detected encoding: {})",
        old_urls.len(),
        args.old.display(),
        old_encoding
    );

    let (new_urls, new_encoding) = read_urls(&args.new)?;
    println!(
        "Read {} new URLs from {} (detected encoding: {})",
        new_urls.len(),
        args.new.display(),
        new_encoding
    );

    let batches = batch_count(new_urls.len(), args.batch_size);
    println!(
        "\nMapping {} URLs against {} candidates in {} batches of up to {}\n",
        new_urls.len(),
        old_urls.len(),
        batches,
        args.batch_size
    );

    let mut stats = RunStats {
        total_urls: new_urls.len(),
        batches,
        ..Default::default()
    };

    for (idx, chunk) in new_urls.chunks(args.batch_size).enumerate() {
        let batch_number = idx + 1;
        let pb = create_progress_bar(
            chunk.len() as u64,
            &format!("Batch {}/{}", batch_number, batches),
        );
        let outcome = process_batch(chunk, &old_urls, batch_number, &args.output, &pb)?;
        pb.finish_with_message(format!(
            "Batch {}/{}: {} matched, {} unmatched",
            batch_number, batches, outcome.matched, outcome.unmatched
        ));
        stats.record(outcome);
    }

    stats.elapsed_seconds = start.elapsed().as_secs_f64();

    let output_location = args
        .output
        .canonicalize()
        .unwrap_or_else(|_| args.output.clone());

    println!("\n{:=<60}", "");
    println!("Mapping complete!");
    println!("  URLs processed: {}", stats.total_urls);
    println!("  Matched: {}", stats.total_matched);
    println!("  Unmatched: {}", stats.total_unmatched);
    println!("  Match rate: {:.1}%", stats.match_rate());
    println!("  Elapsed: {}", format_duration(start.elapsed()));
    println!("  Output files saved in: {}", output_location.display());
    println!("{:=<60}", "");

    if let Some(path) = args.stats {
        stats.write_to_file(&path)?;
        println!("Stats written to {}", path.display());
    }

    Ok(())
}
