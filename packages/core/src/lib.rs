#![deny(clippy::all)]

/**
 * css-typed - TypeScript declaration generation for CSS Modules
 *
 * Observes css-loader output inside a bundling pipeline, extracts the
 * exported local class names and writes a sibling `.d.ts` file. The
 * content flowing through the pipeline is never altered.
 */
pub mod error;
pub mod extract;
pub mod file_system;
pub mod format;
pub mod loader;
pub mod logging;
pub mod names;
pub mod options;
pub mod prettier;
pub mod render;

pub use error::GenerateError;
pub use loader::{LoaderResult, TypingsGenerator};
pub use options::{FormatterKind, GenerateOptions};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
