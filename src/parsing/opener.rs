//! Opening new blocks for the markers a line has left over

use crate::language::{Block, BlockKind, Marker, ParsedLine, ParsingError, Tree};

/// Open a block for each marker not consumed by the resolver, each one
/// nested in the one before, beneath the last matched block (found by
/// following last children `depth` levels down from the root). Then put the
/// text of the line into the innermost block, opening a paragraph to hold
/// it if necessary.
pub fn open<'i>(
    root: &mut Tree<Block<'i>>,
    line: &ParsedLine<'i>,
    consumed: usize,
    depth: usize,
) -> Result<(), ParsingError> {
    let number = line
        .line
        .number;

    let remaining = line
        .markers
        .get(consumed..)
        .ok_or(ParsingError::IllegalParserState(number))?;

    let mut node = root;
    for _ in 0..depth {
        node = node
            .children
            .last_mut()
            .ok_or(ParsingError::IllegalParserState(number))?;
    }

    for marker in remaining {
        node = match marker {
            Marker::BlankLine => return Err(ParsingError::UnexpectedBlankLine(number)),
            Marker::BulletListItem { .. } | Marker::OrderedListItem { .. } => {
                let list = if node
                    .item
                    .accepts_item(marker)
                {
                    node
                } else {
                    let block =
                        Block::list(marker).ok_or(ParsingError::IllegalParserState(number))?;
                    attach(node, block, number)?
                };
                let block =
                    Block::list_item(marker).ok_or(ParsingError::IllegalParserState(number))?;
                attach(list, block, number)?
            }
            Marker::BlockQuote => attach(node, Block::block_quote(), number)?,
            Marker::CodeFence { info } => attach(node, Block::code_block(*info), number)?,
        };
    }

    let remainder = line.remainder;

    match node
        .item
        .kind
    {
        BlockKind::Paragraph { .. } => {
            if !node
                .item
                .push_line(remainder)
            {
                return Err(ParsingError::ClosedAttachment(number));
            }
        }
        // the opening fence is not part of the code.
        BlockKind::CodeBlock { .. } => {}
        _ => {
            if !remainder.is_empty() {
                attach(node, Block::paragraph(remainder), number)?;
            }
        }
    }

    Ok(())
}

/// Add a new block as the last child of the given parent, which must be an
/// open container whose existing children are all closed.
fn attach<'t, 'i>(
    parent: &'t mut Tree<Block<'i>>,
    block: Block<'i>,
    number: usize,
) -> Result<&'t mut Tree<Block<'i>>, ParsingError> {
    if parent
        .item
        .closed
    {
        return Err(ParsingError::ClosedAttachment(number));
    }
    if parent
        .item
        .is_leaf()
    {
        return Err(ParsingError::LeafAttachment(number));
    }
    if let Some(sibling) = parent
        .children
        .last()
    {
        if sibling
            .item
            .is_open()
        {
            return Err(ParsingError::IllegalParserState(number));
        }
    }

    Ok(parent.push(block))
}
