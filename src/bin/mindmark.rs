//! Command-line interface for mindmark
//! Parses a mindmark file (or stdin) and prints it in one of the output formats.
//!
//! Usage:
//!   mindmark `<path>` [--format `<format>`] [--stats]   - Parse and print a file ('-' reads stdin)
//!   mindmark --list-formats                             - List all available formats

use clap::{Arg, ArgAction, Command};
use mindmark::mindmark::formats::Format;
use mindmark::mindmark::loader::{DocumentLoader, LoaderError};

fn main() {
    let matches = Command::new("mindmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting mindmark outlines")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the mindmark file, or '-' for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)")
                .default_value("debug"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Print token, statement and error counts to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let (Some(path), Some(format)) = (
        matches.get_one::<String>("path"),
        matches.get_one::<String>("format"),
    ) else {
        eprintln!("A path is required unless listing formats");
        std::process::exit(2);
    };

    if let Err(e) = handle_parse_command(path, format, matches.get_flag("stats")) {
        eprintln!("Error: {}", e);
        if let LoaderError::FormatError(_) = e {
            let names: Vec<&str> = Format::ALL.iter().map(|f| f.name()).collect();
            eprintln!("\nAvailable formats: {}", names.join(", "));
        }
        std::process::exit(1);
    }
}

fn load(path: &str) -> Result<DocumentLoader, LoaderError> {
    if path == "-" {
        DocumentLoader::from_reader(std::io::stdin().lock())
    } else {
        DocumentLoader::from_path(path)
    }
}

/// Parse the input and print it in the requested format
fn handle_parse_command(path: &str, format: &str, stats: bool) -> Result<(), LoaderError> {
    let format = Format::from_name(format)?;
    let doc = load(path)?.parse();
    let formatted = format.render(&doc)?;

    println!("{}", formatted.trim_end_matches('\n'));

    if stats {
        eprintln!(
            "{} tokens, {} statements, {} errors",
            doc.tokens.len(),
            doc.statement_count(),
            doc.errors().len()
        );
    }
    Ok(())
}

fn handle_list_formats_command() {
    println!("Available formats:\n");

    for format in Format::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
