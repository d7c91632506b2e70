//! Recognizing the block markers at the front of a line

use crate::language::Marker;

/// Try to recognize a marker in the text at the given cursor (a byte
/// position). On success returns the marker and the position just past it;
/// otherwise None, and the caller's cursor stays where it was.
pub fn match_marker<'i>(text: &'i str, cursor: usize) -> Option<(Marker<'i>, usize)> {
    let content = text.get(cursor..)?;

    // a blank line is only a blank line if it is blank all the way through.
    if cursor == 0 && is_blank(text) {
        return Some((Marker::BlankLine, text.len()));
    }

    if let Some(cap) = regex!(r"^([*+-]) ").captures(content) {
        let bullet = cap
            .get(1)?
            .as_str()
            .chars()
            .next()?;
        let width = cap
            .get(0)?
            .end();
        return Some((Marker::BulletListItem { bullet }, cursor + width));
    }

    if let Some(cap) = regex!(r"^([0-9]+)\. ").captures(content) {
        // an index too large to represent isn't a list item, just text.
        if let Ok(index) = cap
            .get(1)?
            .as_str()
            .parse::<u64>()
        {
            let width = cap
                .get(0)?
                .end();
            return Some((Marker::OrderedListItem { index }, cursor + width));
        }
    }

    if let Some(m) = regex!(r"^>(?: |$)").find(content) {
        return Some((Marker::BlockQuote, cursor + m.end()));
    }

    if let Some(cap) = regex!(r"^```\s*(.*?)\s*$").captures(content) {
        let info = cap
            .get(1)?
            .as_str();
        return Some((Marker::CodeFence { info }, text.len()));
    }

    None
}

pub fn is_blank(text: &str) -> bool {
    text.chars()
        .all(char::is_whitespace)
}

/// A line which would end an open code block: three backticks after any
/// leading whitespace, whatever follows them.
pub fn is_closing_fence(text: &str) -> bool {
    text.trim_start()
        .starts_with("```")
}

/// Take up to `count` block quote markers (and any whitespace before each)
/// off the front of a line, stopping at the first one missing. A line of
/// code inside a quote keeps everything after its quote markers, including
/// its own indentation.
pub fn strip_quotes(text: &str, count: usize) -> &str {
    let mut cursor = 0;
    for _ in 0..count {
        let rest = &text[cursor..];
        let start = cursor + rest.len()
            - rest
                .trim_start()
                .len();
        match match_marker(text, start) {
            Some((Marker::BlockQuote, next)) => cursor = next,
            _ => break,
        }
    }
    &text[cursor..]
}
