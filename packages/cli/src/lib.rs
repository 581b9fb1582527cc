#![deny(clippy::all)]

/**
 * css-typed CLI
 *
 * Batch front end over the generation pipeline: expands globs over
 * css-loader output files and emits a declaration per stylesheet.
 */
pub mod run;

/// CLI version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
