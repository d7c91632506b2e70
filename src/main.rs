use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::{debug, info, Level};

use markdownish::language::{Document, ParsingError};
use markdownish::parsing::{self, ParseOptions};
use markdownish::rendering;

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let filename = Arg::new("filename")
        .required(true)
        .help("The markdownish file to read, or '-' for standard input.");

    let matches = Command::new("markdownish")
        .version(VERSION)
        .propagate_version(true)
        .about("Parse markdownish documents into block structure, and render them.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Report more of what is going on. Repeat for even more detail."),
        )
        .arg(
            Arg::new("workers")
                .long("workers")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Maximum number of sections to parse concurrently. Defaults to the number of available cores."),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the given document and report on its structure")
                .arg(filename.clone()),
        )
        .subcommand(
            Command::new("render")
                .about("Render the given document as an HTML page on standard output")
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Title for the page. Defaults to the name of the file."),
                )
                .arg(filename),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut options = ParseOptions::default();
    if let Some(workers) = matches.get_one::<usize>("workers") {
        options.workers = *workers;
    }
    debug!(?options);

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = required_filename(submatches);
            let content = load_or_exit(filename);
            let document = parse_or_exit(filename, &content, &options);

            println!(
                "{}: {} section{}, {} block{}",
                filename.to_string_lossy(),
                document
                    .sections()
                    .len(),
                plural(
                    document
                        .sections()
                        .len()
                ),
                document.count(),
                plural(document.count())
            );
        }
        Some(("render", submatches)) => {
            let filename = required_filename(submatches);
            let content = load_or_exit(filename);
            let document = parse_or_exit(filename, &content, &options);

            let title = match submatches.get_one::<String>("title") {
                Some(title) => title.clone(),
                None => filename
                    .file_stem()
                    .map(|stem| {
                        stem.to_string_lossy()
                            .to_string()
                    })
                    .unwrap_or_default(),
            };

            info!("Rendering {}", filename.display());
            match rendering::render_page(&document, &title) {
                Ok(page) => print!("{}", page),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error.bold());
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: markdownish [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn required_filename(submatches: &ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            // clap enforces that the argument is present
            eprintln!("{}: no filename given", "error".bright_red());
            std::process::exit(2);
        }
    }
}

fn load_or_exit(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn parse_or_exit<'i>(filename: &Path, content: &'i str, options: &ParseOptions) -> Document<'i> {
    match parsing::parse_with(content, options) {
        Ok(document) => document,
        Err(errors) => {
            report_errors(filename, content, &errors);
            std::process::exit(1);
        }
    }
}

// Show the first error in full and any others concisely.
fn report_errors(filename: &Path, content: &str, errors: &[ParsingError]) {
    if let Some((first, rest)) = errors.split_first() {
        eprintln!("{}", problem::full_parsing_error(first, filename, content));
        for error in rest {
            eprintln!("{}", problem::concise_parsing_error(error, filename));
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
