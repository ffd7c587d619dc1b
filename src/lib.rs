//! Redirect mapping library - shared modules for the CLI.

pub mod batch;
pub mod encoding;
pub mod matching;
pub mod models;
pub mod normalize;
pub mod progress;
pub mod safety;
