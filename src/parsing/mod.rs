//! parser for the markdownish dialect

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{Block, Document, LoadingError, ParsingError, Tree};
use crate::parallel;

pub mod lines;
pub mod markers;
mod opener;
pub mod parser;
mod resolver;
pub mod sections;

pub use markers::is_closing_fence;
pub use parser::Parser;
pub use sections::Section;

/// Settings governing how a document is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Upper bound on how many sections are parsed at once.
    pub workers: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

/// Read a file and return an owned String. We pass that ownership back to the
/// caller so that the Document object created by parse() below can borrow
/// from it. A filename of "-" reads standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Document, or return the list of errors encountered.
pub fn parse(content: &str) -> Result<Document<'_>, Vec<ParsingError>> {
    parse_with(content, &ParseOptions::default())
}

pub fn parse_with<'i>(
    content: &'i str,
    options: &ParseOptions,
) -> Result<Document<'i>, Vec<ParsingError>> {
    let lines = lines::classify(content);
    let sections = sections::split_sections(lines);

    debug!(
        "Found {} section{}",
        sections.len(),
        if sections.len() == 1 { "" } else { "s" }
    );

    let result = parallel::dispatch(sections, options.workers, |_, section| {
        parser::parse_section(&section)
    });

    match result {
        Ok(trees) => {
            let mut root = Tree::new(Block::document());
            root.children = trees;
            root.item
                .close();
            Ok(Document { root })
        }
        Err(errors) => {
            debug!("errors: {}", errors.len());
            Err(errors)
        }
    }
}
