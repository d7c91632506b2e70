use super::messages::generate_error_message;
use markdownish::language::{LoadingError, ParsingError};
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a parsing error with full details including the offending line.
pub fn full_parsing_error<'i>(error: &ParsingError, filename: &'i Path, source: &'i str) -> String {
    let (problem, details) = generate_error_message(error);

    // sections are numbered from 0, lines from 1
    let (location, code) = match error {
        ParsingError::EmptySection(index) => (format!("section {}", index), None),
        _ => {
            let line = error.offset();
            let code = source
                .lines()
                .nth(line.saturating_sub(1))
                .unwrap_or("?");
            (line.to_string(), Some((line, code)))
        }
    };

    match code {
        Some((line, code)) => {
            let width = 3.max(
                line.to_string()
                    .len(),
            );
            format!(
                r#"
{}: {}:{} {}

{:width$} {}
{} {} {}

{}
                "#,
                "error".bright_red(),
                filename.to_string_lossy(),
                location,
                problem.bold(),
                ' ',
                '|'.bright_blue(),
                format!("{:>width$}", line).bright_blue(),
                '|'.bright_blue(),
                code,
                details
            )
            .trim_ascii()
            .to_string()
        }
        None => format!(
            "{}: {}:{} {}\n\n{}",
            "error".bright_red(),
            filename.to_string_lossy(),
            location,
            problem.bold(),
            details
        ),
    }
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error<'i>(error: &ParsingError, filename: &'i Path) -> String {
    let (problem, _) = generate_error_message(error);

    format!(
        "{}: {}: {} ({})",
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
        error
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error.bold()
    )
}
