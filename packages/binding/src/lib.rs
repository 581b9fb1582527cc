#![deny(clippy::all)]

use napi_derive::napi;
use std::path::Path;

use css_typed::file_system::OsFileSystem;
use css_typed::logging::NullLogger;
use css_typed::{GenerateOptions, TypingsGenerator};

/// Result handed back to the JS loader shim.
///
/// `content` is always the original source; the bundler pipeline must never
/// observe a rewrite. `error` carries a recoverable generation diagnostic
/// which the shim reports as a module warning.
#[napi(object)]
pub struct LoaderOutput {
    pub content: String,
    pub emitted_path: Option<String>,
    pub error: Option<String>,
}

/// Transform hook called once per stylesheet module.
///
/// `options_json` is the loader options object serialized by the JS shim.
/// A malformed options object is caller misuse and fails the call up front;
/// generation failures after that are reported through `LoaderOutput.error`
/// with the content passed through untouched.
#[napi]
pub fn transform(
    content: String,
    resource_path: String,
    options_json: Option<String>,
) -> napi::Result<LoaderOutput> {
    let options = match options_json {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| napi::Error::from_reason(format!("invalid options: {}", e)))?;
            GenerateOptions::from_json(value).map_err(|e| napi::Error::from_reason(e.to_string()))?
        }
        None => GenerateOptions::default(),
    };

    let fs = OsFileSystem::new();
    let logger = NullLogger::new();
    let generator = TypingsGenerator::new(&fs, &logger, options);
    let result = generator.process(&content, Path::new(&resource_path));

    Ok(LoaderOutput {
        content: result.content,
        emitted_path: result.emitted.map(|p| p.to_string_lossy().into_owned()),
        error: result.diagnostic.map(|e| e.to_string()),
    })
}
