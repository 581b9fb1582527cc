// Batch Runner
//
// Expands input globs, maps loader outputs back to their resource paths
// and runs the generation pipeline per file. Files are independent, so the
// batch runs in parallel; one failed file never aborts the rest.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;

use css_typed::file_system::{FileSystem, OsFileSystem};
use css_typed::logging::{ConsoleLogger, LogLevel, Logger};
use css_typed::{GenerateOptions, TypingsGenerator};

/// Summary of one batch run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum FileOutcome {
    Generated,
    Skipped,
    Failed,
}

/// Map a css-loader output file back to the stylesheet it was compiled
/// from: `button.module.css.js` -> `button.module.css`. Inputs without a
/// `.js` extension are taken as the resource itself.
pub fn resource_path_for(input: &Path) -> PathBuf {
    match input.extension() {
        Some(ext) if ext == "js" => input.with_extension(""),
        _ => input.to_path_buf(),
    }
}

/// Run the pipeline over every file matched by `patterns`.
pub fn run(patterns: &[String], options: GenerateOptions, verbose: bool) -> Result<RunSummary> {
    let mut inputs: Vec<PathBuf> = Vec::new();
    for pattern in patterns {
        let paths =
            glob::glob(pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?;
        for entry in paths {
            inputs.push(entry.with_context(|| format!("failed to read entry for {}", pattern))?);
        }
    }
    if inputs.is_empty() {
        bail!("no input files matched");
    }
    inputs.sort();
    inputs.dedup();

    let fs = OsFileSystem::new();
    let logger = ConsoleLogger::new(if verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    });
    let generator = TypingsGenerator::new(&fs, &logger, options);

    let outcomes: Vec<FileOutcome> = inputs
        .par_iter()
        .map(|input| {
            let source = match fs.read_file(input) {
                Ok(source) => source,
                Err(err) => {
                    logger.error(&format!("{}: {}", input.display(), err));
                    return FileOutcome::Failed;
                }
            };
            let resource = resource_path_for(input);
            let result = generator.process(&source, &resource);
            if result.diagnostic.is_some() {
                FileOutcome::Failed
            } else if result.emitted.is_some() {
                FileOutcome::Generated
            } else {
                FileOutcome::Skipped
            }
        })
        .collect();

    let mut summary = RunSummary::default();
    for outcome in outcomes {
        match outcome {
            FileOutcome::Generated => summary.generated += 1,
            FileOutcome::Skipped => summary.skipped += 1,
            FileOutcome::Failed => summary.failed += 1,
        }
    }
    Ok(summary)
}
