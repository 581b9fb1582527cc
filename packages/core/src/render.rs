// Declaration Rendering
//
// Renders the extracted key set into a TypeScript declaration module.

use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;

/// Property names matching this pattern are emitted without quotes.
static BARE_IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Render a declaration module: an exported interface with one string-typed
/// member per class name, plus a default-exported value of that type.
///
/// Members appear in key order. Output uses `\n` internally; the EOL policy
/// is the formatting pipeline's concern. Callers never pass an empty key
/// set.
pub fn render_declaration(interface_name: &str, keys: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "export interface {} {{", interface_name);
    for key in keys {
        let _ = writeln!(out, "  {}: string;", member_name(key));
    }
    out.push_str("}\n\n");
    let _ = writeln!(out, "declare const styles: {};", interface_name);
    out.push_str("export default styles;\n");
    out
}

/// Quote the property name unless it is a valid bare identifier.
fn member_name(key: &str) -> String {
    if BARE_IDENT.is_match(key) {
        key.to_string()
    } else {
        let escaped = key.replace('\\', "\\\\").replace('\'', "\\'");
        format!("'{}'", escaped)
    }
}
