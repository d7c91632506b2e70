//! Line by line parser for one section of markdownish

use tracing::trace;

use crate::language::{close_all, Block, ParsedLine, ParsingError, Tree};

use super::opener::open;
use super::resolver::{resolve, Resolution};
use super::sections::Section;

/// The state of a section being parsed: a tree of blocks, some open and
/// some closed, rooted at a Section block.
#[derive(Debug)]
pub struct Parser<'i> {
    root: Tree<Block<'i>>,
}

impl<'i> Parser<'i> {
    pub fn new() -> Parser<'i> {
        Parser {
            root: Tree::new(Block::section()),
        }
    }

    /// Continue (or close) the open blocks with the given line, then open
    /// whatever new blocks the line's remaining markers call for.
    pub fn read_line(&mut self, line: &ParsedLine<'i>) -> Result<(), ParsingError> {
        let resolution = resolve(&mut self.root, line);
        trace!(
            line = line
                .line
                .number,
            ?resolution
        );

        match resolution {
            Resolution::Literal => Ok(()),
            Resolution::Matched { consumed, depth } => open(&mut self.root, line, consumed, depth),
        }
    }

    /// The tree so far. Blocks still open are those the next line could
    /// continue.
    pub fn tree(&self) -> &Tree<Block<'i>> {
        &self.root
    }

    /// End of input: close everything and hand back the tree.
    pub fn finish(mut self) -> Tree<Block<'i>> {
        close_all(&mut self.root);
        self.root
    }
}

impl<'i> Default for Parser<'i> {
    fn default() -> Self {
        Parser::new()
    }
}

pub fn parse_section<'i>(section: &Section<'i>) -> Result<Tree<Block<'i>>, ParsingError> {
    if section
        .lines
        .is_empty()
    {
        return Err(ParsingError::EmptySection(section.index));
    }

    let mut parser = Parser::new();
    for line in &section.lines {
        parser.read_line(line)?;
    }

    Ok(parser.finish())
}
