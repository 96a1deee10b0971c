//! Command-line front end for locale-aware number parsing.
//!
//! Builds one parser for `--locale` (or the environment's active locale) and
//! prints one parsed value per INPUT, `NaN` for unparseable input.

use std::process::exit;

use clap::Parser;
use locnum::{NumberParser, system_locale};

/// Parse locale-formatted numbers.
#[derive(Debug, Parser)]
#[command(name = "locnum")]
#[command(about = "Parse locale-formatted numbers", long_about = None)]
#[command(version)]
struct Cli {
    /// BCP-47 locale tag (e.g. de, en-IN, zh-Hans-CN-u-nu-hanidec);
    /// defaults to the environment's active locale
    #[arg(short, long)]
    locale: Option<String>,

    /// Numeral strings to parse
    #[arg(required = true)]
    inputs: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let parser = match &cli.locale {
        Some(tag) => NumberParser::try_from_tag(tag),
        None => NumberParser::try_new(&system_locale()),
    };
    let parser = match parser {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("locnum: {e}");
            exit(exitcode::USAGE);
        }
    };

    let mut failed = false;
    for input in &cli.inputs {
        let value = parser.parse(input);
        println!("{value}");
        failed |= value.is_nan();
    }

    exit(if failed { exitcode::DATAERR } else { exitcode::OK });
}
