//! Types representing the block structure of a markdownish document

use super::tree::{Tree, Visit};

/// One line of the original input, without its line ending.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Line<'i> {
    pub number: usize,
    pub text: &'i str,
}

/// A recognized token at the front of a line which opens (or continues) a
/// block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker<'i> {
    BlankLine,
    BulletListItem { bullet: char },
    OrderedListItem { index: u64 },
    BlockQuote,
    CodeFence { info: &'i str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'i> {
    pub line: Line<'i>,
    pub offset: usize,
    pub markers: Vec<Marker<'i>>,
    pub remainder: &'i str,
}

impl<'i> ParsedLine<'i> {
    pub fn is_blank(&self) -> bool {
        matches!(
            self.markers
                .first(),
            Some(Marker::BlankLine)
        )
    }

    /// Does this line end with a code fence? Such a line opens a code block,
    /// or closes the one already open. A fence is always the final marker on
    /// a line.
    pub fn is_fence(&self) -> bool {
        matches!(
            self.markers
                .last(),
            Some(Marker::CodeFence { .. })
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind<'i> {
    Document,
    Section,
    Paragraph {
        lines: Vec<&'i str>,
    },
    List {
        ordered: bool,
        bullet: Option<char>,
    },
    ListItem {
        index: Option<u64>,
    },
    BlockQuote,
    CodeBlock {
        info: &'i str,
        lines: Vec<&'i str>,
    },
}

/// The outcome of testing a line against an open block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// The block continues, and used up the next marker in doing so.
    Consumed,
    /// The block continues; the next marker (if any) is left for deeper
    /// blocks or for opening new ones.
    Peeked,
    /// The block does not continue and must be closed.
    Broken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'i> {
    pub kind: BlockKind<'i>,
    pub closed: bool,
}

impl<'i> Block<'i> {
    fn open(kind: BlockKind<'i>) -> Block<'i> {
        Block {
            kind,
            closed: false,
        }
    }

    pub fn document() -> Block<'i> {
        Block::open(BlockKind::Document)
    }

    pub fn section() -> Block<'i> {
        Block::open(BlockKind::Section)
    }

    pub fn paragraph(text: &'i str) -> Block<'i> {
        Block::open(BlockKind::Paragraph { lines: vec![text] })
    }

    pub fn block_quote() -> Block<'i> {
        Block::open(BlockKind::BlockQuote)
    }

    pub fn code_block(info: &'i str) -> Block<'i> {
        Block::open(BlockKind::CodeBlock {
            info,
            lines: Vec::new(),
        })
    }

    /// A new list whose kind (and bullet, if unordered) is taken from the
    /// marker that started it. Returns None if the marker is not a list item.
    pub fn list(marker: &Marker<'i>) -> Option<Block<'i>> {
        match marker {
            Marker::BulletListItem { bullet } => Some(Block::open(BlockKind::List {
                ordered: false,
                bullet: Some(*bullet),
            })),
            Marker::OrderedListItem { .. } => Some(Block::open(BlockKind::List {
                ordered: true,
                bullet: None,
            })),
            _ => None,
        }
    }

    pub fn list_item(marker: &Marker<'i>) -> Option<Block<'i>> {
        match marker {
            Marker::BulletListItem { .. } => {
                Some(Block::open(BlockKind::ListItem { index: None }))
            }
            Marker::OrderedListItem { index } => Some(Block::open(BlockKind::ListItem {
                index: Some(*index),
            })),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    /// Closing is one way; there is no reopen.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Leaf blocks hold text and never have children.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            BlockKind::Paragraph { .. } | BlockKind::CodeBlock { .. }
        )
    }

    /// Would this block, as a list, take the given marker as its next item?
    /// Unordered lists only continue with the same bullet character; ordered
    /// lists continue whatever the index.
    pub fn accepts_item(&self, marker: &Marker) -> bool {
        match (&self.kind, marker) {
            (BlockKind::List { ordered: true, .. }, Marker::OrderedListItem { .. }) => true,
            (
                BlockKind::List {
                    ordered: false,
                    bullet: Some(expected),
                },
                Marker::BulletListItem { bullet },
            ) => expected == bullet,
            _ => false,
        }
    }

    /// Test whether a line continues this block. The marker is the next one
    /// not yet used up by an enclosing block (None if they are all gone); the
    /// remainder is the text of the line after all its markers.
    ///
    /// A code block is tested against the last marker and the raw line
    /// instead, and only closes on a fence.
    pub fn continues(&self, marker: Option<&Marker>, remainder: &str) -> Continuation {
        match &self.kind {
            BlockKind::Document | BlockKind::Section => Continuation::Peeked,
            BlockKind::Paragraph { .. } => {
                if marker.is_none() && !remainder.is_empty() {
                    Continuation::Peeked
                } else {
                    Continuation::Broken
                }
            }
            BlockKind::List { .. } => match marker {
                Some(marker) if self.accepts_item(marker) => Continuation::Peeked,
                _ => Continuation::Broken,
            },
            BlockKind::ListItem { .. } => Continuation::Broken,
            BlockKind::BlockQuote => match marker {
                Some(Marker::BlockQuote) => Continuation::Consumed,
                _ => Continuation::Broken,
            },
            BlockKind::CodeBlock { .. } => {
                if matches!(marker, Some(Marker::CodeFence { .. }))
                    || crate::parsing::is_closing_fence(remainder)
                {
                    Continuation::Broken
                } else {
                    Continuation::Peeked
                }
            }
        }
    }

    pub fn matches(&self, marker: Option<&Marker>, remainder: &str) -> bool {
        self.continues(marker, remainder) != Continuation::Broken
    }

    /// Add a line of text to a leaf block. Returns false (and does nothing)
    /// if this block is closed or does not hold text.
    pub fn push_line(&mut self, text: &'i str) -> bool {
        if self.closed {
            return false;
        }
        match &mut self.kind {
            BlockKind::Paragraph { lines } | BlockKind::CodeBlock { lines, .. } => {
                lines.push(text);
                true
            }
            _ => false,
        }
    }

    pub fn lines(&self) -> &[&'i str] {
        match &self.kind {
            BlockKind::Paragraph { lines } | BlockKind::CodeBlock { lines, .. } => lines,
            _ => &[],
        }
    }
}

/// Close a block and everything beneath it. Only the last child of an open
/// block can itself be open, so it is enough to follow the last children
/// down until reaching one that is already closed.
pub fn close_all(node: &mut Tree<Block>) {
    node.iterate_last_mut(|_, node| {
        if node
            .item
            .closed
        {
            return Visit::Stop;
        }
        node.item
            .close();
        Visit::Descend
    });
}

/// The result of parsing: a Document block whose children are one Section
/// block per run of non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'i> {
    pub root: Tree<Block<'i>>,
}

impl<'i> Document<'i> {
    pub fn sections(&self) -> &[Tree<Block<'i>>] {
        &self
            .root
            .children
    }

    /// Total number of blocks, excluding the Document itself.
    pub fn count(&self) -> usize {
        self.root
            .count()
            - 1
    }

    /// Check that every block has been closed. Holds for any Document
    /// returned by the parser.
    pub fn is_finished(&self) -> bool {
        let mut finished = true;
        self.root
            .iterate_breadth_first(|_, node| {
                if node
                    .item
                    .closed
                {
                    Visit::Descend
                } else {
                    finished = false;
                    Visit::Stop
                }
            });
        finished
    }
}
