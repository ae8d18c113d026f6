//! Command-line interface for UK postcodes
//! This binary splits postcodes into their outward and inward codes, validating
//! them against the UK formation rules on the way.
//!
//! Usage:
//!   postcode `<code>`... [--format `<format>`]       - Validate and split postcodes
//!   postcode `<code>`... --lenient                  - Split by position, no validation
//!   postcode `<code>`... --optional-incode          - Accept outward-only postcodes

use clap::{Arg, ArgAction, Command};
use postcode_parser::postcode::Postcode;

fn main() {
    let matches = Command::new("postcode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for validating and splitting UK postcodes")
        .arg_required_else_help(true)
        .arg(
            Arg::new("codes")
                .help("Postcodes to parse, e.g. 'CR0 2YR'")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .help("Skip structural validation and split purely by position")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("optional-incode")
                .long("optional-incode")
                .help("Accept postcodes carrying only an outward code")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (pair: tab-separated outcode and incode; json)")
                .default_value("pair"),
        )
        .get_matches();

    let codes: Vec<&String> = matches
        .get_many::<String>("codes")
        .expect("codes are required")
        .collect();
    let strict = !matches.get_flag("lenient");
    let incode_mandatory = !matches.get_flag("optional-incode");
    let format = matches.get_one::<String>("format").unwrap();

    handle_parse_command(&codes, strict, incode_mandatory, format);
}

/// Parse every code up front so nothing is printed for a partially valid
/// invocation, then render in the requested format.
fn handle_parse_command(codes: &[&String], strict: bool, incode_mandatory: bool, format: &str) {
    let mut parsed = Vec::with_capacity(codes.len());
    for code in codes {
        let postcode = Postcode::parse(code, strict, incode_mandatory).unwrap_or_else(|e| {
            eprintln!("{}: {}", code, e);
            std::process::exit(1);
        });
        parsed.push(postcode);
    }

    match format {
        "pair" => {
            for postcode in &parsed {
                println!("{}\t{}", postcode.outcode(), postcode.incode());
            }
        }
        "json" => {
            let rendered = serde_json::to_string_pretty(&parsed).unwrap_or_else(|e| {
                eprintln!("Error formatting output: {}", e);
                std::process::exit(1);
            });
            println!("{}", rendered);
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: pair, json");
            std::process::exit(2);
        }
    }
}
