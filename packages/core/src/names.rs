// Name Derivation
//
// Maps a stylesheet path to its declaration output path and the PascalCase
// interface identifier. Pure functions of the path: no I/O, no randomness,
// stable across processes.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of non-alphanumeric characters separate name segments.
static SEGMENT_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Derive the exported interface identifier from a stylesheet path.
///
/// `button.module.css` becomes `ButtonModule`. The result is always a valid
/// TypeScript type identifier: when the derived name is empty or would start
/// with a digit it is prefixed with `_`.
pub fn interface_name(resource_path: &Path) -> String {
    let stem = resource_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    let mut name = String::new();
    for segment in SEGMENT_SPLIT.split(&stem) {
        let mut rest = segment.chars();
        if let Some(first) = rest.next() {
            name.extend(first.to_uppercase());
            name.push_str(rest.as_str());
        }
    }

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Derive the sibling declaration file path: the resource file name with
/// `.d.ts` appended (`foo.module.css` -> `foo.module.css.d.ts`).
pub fn declaration_path(resource_path: &Path) -> PathBuf {
    let mut name = resource_path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(".d.ts");
    resource_path.with_file_name(name)
}
