//! Splitting input into lines and classifying each one

use crate::language::{Line, Marker, ParsedLine};

use super::markers::match_marker;

/// Split raw input on line breaks. A carriage return before the newline is
/// part of the line break, not the line. Line numbers start at 1.
pub fn split_lines(content: &str) -> impl Iterator<Item = Line<'_>> {
    content
        .split('\n')
        .enumerate()
        .map(|(i, text)| Line {
            number: i + 1,
            text: text
                .strip_suffix('\r')
                .unwrap_or(text),
        })
}

pub fn classify(content: &str) -> Vec<ParsedLine<'_>> {
    split_lines(content)
        .map(classify_line)
        .collect()
}

/// Work out the indentation of a line, the markers at its front, and the
/// text left over after them.
pub fn classify_line(line: Line<'_>) -> ParsedLine<'_> {
    let text = line.text;

    if let Some((Marker::BlankLine, end)) = match_marker(text, 0) {
        return ParsedLine {
            line,
            offset: text
                .chars()
                .count(),
            markers: vec![Marker::BlankLine],
            remainder: &text[end..],
        };
    }

    let start = text.len()
        - text
            .trim_start()
            .len();
    let offset = text[..start]
        .chars()
        .count();

    let mut markers = Vec::new();
    let mut cursor = start;

    while let Some((marker, next)) = match_marker(text, cursor) {
        let terminal = matches!(marker, Marker::CodeFence { .. });
        markers.push(marker);
        cursor = next;

        if terminal {
            break;
        }

        cursor = skip_whitespace(text, cursor);
    }

    ParsedLine {
        line,
        offset,
        markers,
        remainder: &text[cursor..],
    }
}

fn skip_whitespace(text: &str, cursor: usize) -> usize {
    let rest = &text[cursor..];
    cursor + rest.len()
        - rest
            .trim_start()
            .len()
}
