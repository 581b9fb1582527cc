// Formatting Pipeline
//
// Banner injection followed by either prettier delegation or manual
// line-ending normalization. The two terminal steps are mutually exclusive:
// when prettier runs it owns the final whitespace conventions and no manual
// EOL pass follows.

use std::path::Path;

use crate::error::GenerateError;
use crate::options::{FormatterKind, GenerateOptions};
use crate::prettier;

/// Native line ending of the host OS.
pub const NATIVE_EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Apply the post-processing steps, in order: banner, then prettier or EOL
/// normalization.
pub fn format_declaration(
    text: &str,
    declaration_path: &Path,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let mut text = text.to_string();
    if let Some(banner) = &options.banner {
        text = format!("{}\n{}", banner, text);
    }

    let use_prettier = match options.formatter {
        Some(FormatterKind::Prettier) => true,
        Some(FormatterKind::None) => false,
        None => prettier::prettier_available(),
    };

    if use_prettier {
        prettier::run_prettier(&text, declaration_path)
    } else {
        let eol = options.eol.as_deref().unwrap_or(NATIVE_EOL);
        Ok(normalize_eol(&text, eol))
    }
}

/// Rewrite every line terminator (`\r\n`, `\r` or `\n`) to `eol`.
fn normalize_eol(text: &str, eol: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(eol);
            }
            '\n' => out.push_str(eol),
            other => out.push(other),
        }
    }
    out
}
