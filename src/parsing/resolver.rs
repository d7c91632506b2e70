//! Working out how far a line continues the blocks that are already open

use crate::language::{close_all, Block, BlockKind, Continuation, ParsedLine, Tree, Visit};

use super::markers::strip_quotes;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The line belonged to an open code block, either as content or as the
    /// fence closing it. Nothing more to do.
    Literal,
    /// The open blocks were matched against the line. The first `consumed`
    /// markers were used up in doing so; `depth` is how deep the last
    /// matched block is (0 being the root). That block is now the deepest
    /// open one, and new blocks are opened beneath it.
    Matched { consumed: usize, depth: usize },
}

/// Match a line against the open blocks of a section, outermost first,
/// closing every block the line does not continue.
///
/// Only the last child of an open block can itself be open, so the open
/// blocks form a single chain from the root, one per level, and walking
/// that chain downwards visits them in breadth first order. An open block
/// that continues lets us carry on to its last child; the first open block
/// that doesn't is closed, along with everything below it, and the walk
/// ends there. Closed siblings are never looked at.
pub fn resolve<'i>(root: &mut Tree<Block<'i>>, line: &ParsedLine<'i>) -> Resolution {
    // Inside a code fence every line is taken as content until a fence
    // closes it, so no other block gets a say. A fence behind container
    // markers (say "> ```") closes it too.
    let mut quotes = 0;
    let mut literal = false;

    root.iterate_last_mut(|_, node| {
        if node
            .item
            .closed
        {
            return Visit::Stop;
        }
        match node
            .item
            .kind
        {
            BlockKind::BlockQuote => quotes += 1,
            BlockKind::CodeBlock { .. } => {
                literal = true;
                let text = line
                    .line
                    .text;
                if node
                    .item
                    .matches(
                        line.markers
                            .last(),
                        text,
                    )
                {
                    node.item
                        .push_line(strip_quotes(text, quotes));
                } else {
                    node.item
                        .close();
                }
                return Visit::Stop;
            }
            _ => {}
        }
        Visit::Descend
    });

    if literal {
        return Resolution::Literal;
    }

    let mut consumed = 0;
    let mut depth = 0;

    root.iterate_last_mut(|level, node| {
        if node
            .item
            .closed
        {
            return Visit::Stop;
        }

        let marker = line
            .markers
            .get(consumed);

        match node
            .item
            .continues(marker, line.remainder)
        {
            Continuation::Consumed => {
                consumed += 1;
                depth = level;
                Visit::Descend
            }
            Continuation::Peeked => {
                depth = level;
                Visit::Descend
            }
            Continuation::Broken => {
                close_all(node);
                Visit::Stop
            }
        }
    });

    Resolution::Matched { consumed, depth }
}
