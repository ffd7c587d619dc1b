//! Input adapters: encoding detection and CSV reading.
//!
//! Source exports are not assumed UTF-8; each file's encoding is guessed from
//! its byte distribution before parsing. Detection is a heuristic collaborator
//! with a narrow contract (bytes in, best-guess encoding out) - a wrong guess
//! that produces malformed text is a fatal input error.

use anyhow::{bail, Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::path::Path;

/// Guess the encoding of a byte buffer.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Decode bytes using the detected encoding.
/// Returns the text plus the encoding label for diagnostics.
pub fn decode(bytes: &[u8]) -> Result<(String, &'static str)> {
    let encoding = detect_encoding(bytes);
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        bail!("input is not valid {}", encoding.name());
    }
    Ok((text.into_owned(), encoding.name()))
}

/// Read all URLs from a CSV file: first column of every row, rows with no
/// columns skipped. The file is decoded with its detected encoding first.
pub fn read_urls(path: &Path) -> Result<(Vec<String>, &'static str)> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (text, encoding) = decode(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("malformed CSV in {}", path.display()))?;
        if let Some(first) = record.get(0) {
            urls.push(first.to_string());
        }
    }
    Ok((urls, encoding))
}
