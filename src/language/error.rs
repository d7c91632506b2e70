use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}

/// Parsing markdownish never fails on account of the input; anything not
/// recognized is just text. These are violations of the parser's own
/// invariants, and so are bugs. Each carries the line number (1 based) at
/// which the problem was detected, except EmptySection which carries the
/// index of the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    IllegalParserState(usize),
    UnexpectedBlankLine(usize),
    ClosedAttachment(usize),
    LeafAttachment(usize),
    EmptySection(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::IllegalParserState(offset) => *offset,
            ParsingError::UnexpectedBlankLine(offset) => *offset,
            ParsingError::ClosedAttachment(offset) => *offset,
            ParsingError::LeafAttachment(offset) => *offset,
            ParsingError::EmptySection(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::IllegalParserState(_) => "illegal parser state".to_string(),
            ParsingError::UnexpectedBlankLine(_) => {
                "blank line reached the block opener".to_string()
            }
            ParsingError::ClosedAttachment(_) => "attempt to add to a closed block".to_string(),
            ParsingError::LeafAttachment(_) => {
                "attempt to open a block inside a paragraph or code block".to_string()
            }
            ParsingError::EmptySection(_) => "section has no lines".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsingError::EmptySection(index) => {
                write!(f, "{} (section {})", self.message(), index)
            }
            _ => write!(f, "{} (line {})", self.message(), self.offset()),
        }
    }
}

impl std::error::Error for ParsingError {}
