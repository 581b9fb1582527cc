// Loader Orchestration
//
// Wires extraction, derivation, rendering, formatting and persistence for
// one invocation. The incoming content always passes through unchanged;
// declaration generation is a side artifact and its failures are reported
// as diagnostics, never as a rewrite or an abort of the primary output.

use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::extract::extract_locals;
use crate::file_system::FileSystem;
use crate::format::format_declaration;
use crate::logging::Logger;
use crate::names::{declaration_path, interface_name};
use crate::options::GenerateOptions;
use crate::render::render_declaration;

/// Outcome of one invocation.
#[derive(Debug)]
pub struct LoaderResult {
    /// The original source fragment, untouched on every path.
    pub content: String,
    /// Path of the declaration file, when one was written.
    pub emitted: Option<PathBuf>,
    /// Recoverable failure from formatting or persistence.
    pub diagnostic: Option<GenerateError>,
}

/// Per-invocation pipeline. Invocations are independent; a generator can be
/// shared across threads because its collaborators are read-only.
pub struct TypingsGenerator<'a> {
    fs: &'a dyn FileSystem,
    logger: &'a dyn Logger,
    options: GenerateOptions,
}

impl<'a> TypingsGenerator<'a> {
    pub fn new(fs: &'a dyn FileSystem, logger: &'a dyn Logger, options: GenerateOptions) -> Self {
        Self {
            fs,
            logger,
            options,
        }
    }

    /// Process one transformed stylesheet module.
    ///
    /// When the fragment exports no locals the invocation is a no-op, not
    /// an error.
    pub fn process(&self, source: &str, resource_path: &Path) -> LoaderResult {
        let keys = extract_locals(source);
        if keys.is_empty() {
            self.logger.debug(&format!(
                "{}: no exported locals, skipping",
                resource_path.display()
            ));
            return LoaderResult {
                content: source.to_string(),
                emitted: None,
                diagnostic: None,
            };
        }

        let out_path = declaration_path(resource_path);
        let name = interface_name(resource_path);
        let rendered = render_declaration(&name, &keys);

        match self.generate(&rendered, &out_path) {
            Ok(()) => {
                self.logger.info(&format!("generated {}", out_path.display()));
                LoaderResult {
                    content: source.to_string(),
                    emitted: Some(out_path),
                    diagnostic: None,
                }
            }
            Err(err) => {
                self.logger
                    .warn(&format!("{}: {}", resource_path.display(), err));
                LoaderResult {
                    content: source.to_string(),
                    emitted: None,
                    diagnostic: Some(err),
                }
            }
        }
    }

    fn generate(&self, rendered: &str, out_path: &Path) -> Result<(), GenerateError> {
        let formatted = format_declaration(rendered, out_path, &self.options)?;
        self.fs
            .write_file(out_path, formatted.as_bytes())
            .map_err(|source| GenerateError::Write {
                path: out_path.to_path_buf(),
                source,
            })
    }
}
