// Error Types
//
// Failures that can escape the generation pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the formatting and persistence steps.
///
/// Extraction, name derivation and rendering are total functions and have
/// no error channel.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The external pretty-printer could not be run or rejected the input.
    #[error("prettier failed for {}: {}", .path.display(), .reason)]
    Format { path: PathBuf, reason: String },

    /// Writing the declaration file failed.
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The options object did not match the expected shape.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}
