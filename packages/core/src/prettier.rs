// Prettier Integration
//
// Locates and invokes the external prettier executable. Availability is a
// process-wide, write-once probe: it cannot change mid-process, so the
// result is never invalidated.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use once_cell::sync::Lazy;

use crate::error::GenerateError;

static PRETTIER_BIN: Lazy<Option<PathBuf>> = Lazy::new(resolve_prettier);

fn bin_name() -> &'static str {
    if cfg!(windows) {
        "prettier.cmd"
    } else {
        "prettier"
    }
}

/// Look for a project-local install first, then fall back to `PATH`.
fn resolve_prettier() -> Option<PathBuf> {
    let local = Path::new("node_modules").join(".bin").join(bin_name());
    if local.is_file() {
        return Some(local);
    }
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(bin_name()))
        .find(|candidate| candidate.is_file())
}

/// Whether a prettier executable is reachable from this process.
pub fn prettier_available() -> bool {
    PRETTIER_BIN.is_some()
}

/// Format declaration text through prettier.
///
/// `--stdin-filepath` makes prettier resolve its own configuration from the
/// working directory; the parser is forced to the TypeScript dialect.
/// Failures propagate, they are never swallowed or retried.
pub fn run_prettier(text: &str, declaration_path: &Path) -> Result<String, GenerateError> {
    let format_err = |reason: String| GenerateError::Format {
        path: declaration_path.to_path_buf(),
        reason,
    };

    let bin = PRETTIER_BIN
        .as_deref()
        .ok_or_else(|| format_err("prettier executable not found".to_string()))?;

    let mut child = Command::new(bin)
        .arg("--parser")
        .arg("typescript")
        .arg("--stdin-filepath")
        .arg(declaration_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format_err(e.to_string()))?;

    child
        .stdin
        .take()
        .ok_or_else(|| format_err("failed to open prettier stdin".to_string()))?
        .write_all(text.as_bytes())
        .map_err(|e| format_err(e.to_string()))?;

    let output = child
        .wait_with_output()
        .map_err(|e| format_err(e.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format_err(format!(
            "exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout).map_err(|e| format_err(e.to_string()))
}
