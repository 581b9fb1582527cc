/**
 * cssdts - CSS Modules declaration generator
 *
 * Generates TypeScript declaration files from css-loader output.
 */
use clap::{Arg, ArgAction, Command};
use std::process;

use css_typed::{FormatterKind, GenerateOptions};
use css_typed_cli::run::run;

fn main() {
    let matches = Command::new("cssdts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("TypeScript declaration generator for CSS Modules")
        .arg(
            Arg::new("inputs")
                .value_name("GLOB")
                .num_args(1..)
                .required(true)
                .help("css-loader output files to process"),
        )
        .arg(
            Arg::new("banner")
                .long("banner")
                .value_name("TEXT")
                .help("Text prepended to every generated declaration"),
        )
        .arg(
            Arg::new("eol")
                .long("eol")
                .value_name("STYLE")
                .value_parser(["lf", "crlf"])
                .help("Line endings when prettier is not used"),
        )
        .arg(
            Arg::new("formatter")
                .long("formatter")
                .value_name("KIND")
                .value_parser(["prettier", "none"])
                .help("Formatter selection (default: auto-detect prettier)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Verbose logging"),
        )
        .get_matches();

    let options = GenerateOptions {
        eol: matches.get_one::<String>("eol").map(|style| {
            if style == "crlf" {
                "\r\n".to_string()
            } else {
                "\n".to_string()
            }
        }),
        banner: matches.get_one::<String>("banner").cloned(),
        formatter: matches.get_one::<String>("formatter").map(|kind| {
            if kind == "prettier" {
                FormatterKind::Prettier
            } else {
                FormatterKind::None
            }
        }),
    };

    let patterns: Vec<String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    match run(&patterns, options, matches.get_flag("verbose")) {
        Ok(summary) => {
            println!(
                "generated {}, skipped {}, failed {}",
                summary.generated, summary.skipped, summary.failed
            );
            if summary.failed > 0 {
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
