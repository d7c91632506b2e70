//! Cutting the input into sections at blank lines

use crate::language::ParsedLine;

/// A maximal run of lines with no blank line between them. Since a blank
/// line closes every open block, each section can be parsed on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'i> {
    pub index: usize,
    pub lines: Vec<ParsedLine<'i>>,
}

/// Group lines into sections. Blank lines separate sections and are
/// dropped, except inside a code fence where they are content and belong to
/// the section the fence is in.
pub fn split_sections(lines: Vec<ParsedLine<'_>>) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut current = Vec::new();
    let mut fenced = false;

    for line in lines {
        if fenced {
            if line.is_fence() {
                fenced = false;
            }
            current.push(line);
            continue;
        }

        if line.is_blank() {
            if !current.is_empty() {
                sections.push(Section {
                    index: sections.len(),
                    lines: std::mem::take(&mut current),
                });
            }
            continue;
        }

        if line.is_fence() {
            fenced = true;
        }
        current.push(line);
    }

    if !current.is_empty() {
        sections.push(Section {
            index: sections.len(),
            lines: current,
        });
    }

    sections
}
