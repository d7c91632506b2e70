//! Render a block tree as HTML

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::language::{Block, BlockKind, Document, Tree};

pub fn render(document: &Document) -> String {
    let mut output = Renderer::new();
    output.render(&document.root);
    output.buffer
}

/// Pending output. Nesting is as deep as the input makes it, so rather than
/// recursing we keep the work still to do on a stack: a block's children are
/// pushed (in reverse) above the closing tag that follows them.
enum Step<'t, 'i> {
    Block(&'t Tree<Block<'i>>),
    // a paragraph directly inside a list item, written without <p> tags
    Inline(&'t [&'i str]),
    Literal(&'static str),
}

struct Renderer {
    buffer: String,
}

impl Renderer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn render(&mut self, root: &Tree<Block>) {
        let mut stack = vec![Step::Block(root)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Block(node) => self.render_block(node, &mut stack),
                Step::Inline(lines) => self.render_text(lines),
                Step::Literal(text) => self
                    .buffer
                    .push_str(text),
            }
        }
    }

    fn render_block<'t, 'i>(&mut self, node: &'t Tree<Block<'i>>, stack: &mut Vec<Step<'t, 'i>>) {
        match &node
            .item
            .kind
        {
            // sections only exist to divide up the work of parsing
            BlockKind::Document | BlockKind::Section => push_children(node, stack),
            BlockKind::Paragraph { lines } => {
                self.buffer
                    .push_str("<p>");
                self.render_text(lines);
                self.buffer
                    .push_str("</p>\n");
            }
            BlockKind::List { ordered, .. } => {
                if *ordered {
                    match first_index(node) {
                        Some(start) if start != 1 => {
                            self.buffer
                                .push_str(&format!("<ol start=\"{}\">\n", start));
                        }
                        _ => self
                            .buffer
                            .push_str("<ol>\n"),
                    }
                    stack.push(Step::Literal("</ol>\n"));
                } else {
                    self.buffer
                        .push_str("<ul>\n");
                    stack.push(Step::Literal("</ul>\n"));
                }
                push_children(node, stack);
            }
            BlockKind::ListItem { .. } => {
                self.buffer
                    .push_str("<li>");
                stack.push(Step::Literal("</li>\n"));
                push_item_children(node, stack);
            }
            BlockKind::BlockQuote => {
                self.buffer
                    .push_str("<blockquote>\n");
                stack.push(Step::Literal("</blockquote>\n"));
                push_children(node, stack);
            }
            BlockKind::CodeBlock { info, lines } => {
                match info
                    .split_whitespace()
                    .next()
                {
                    Some(language) => self
                        .buffer
                        .push_str(&format!(
                            "<pre><code class=\"language-{}\">",
                            encode_double_quoted_attribute(language)
                        )),
                    None => self
                        .buffer
                        .push_str("<pre><code>"),
                }
                for line in lines {
                    self.buffer
                        .push_str(&encode_text(line));
                    self.buffer
                        .push('\n');
                }
                self.buffer
                    .push_str("</code></pre>\n");
            }
        }
    }

    fn render_text(&mut self, lines: &[&str]) {
        for (i, line) in lines
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.buffer
                    .push('\n');
            }
            self.buffer
                .push_str(&encode_text(line));
        }
    }
}

fn push_children<'t, 'i>(node: &'t Tree<Block<'i>>, stack: &mut Vec<Step<'t, 'i>>) {
    stack.extend(
        node.children
            .iter()
            .rev()
            .map(Step::Block),
    );
}

// Paragraphs in an item run on from the <li>; anything else starts on a line
// of its own, as does a paragraph following it.
fn push_item_children<'t, 'i>(node: &'t Tree<Block<'i>>, stack: &mut Vec<Step<'t, 'i>>) {
    for (i, child) in node
        .children
        .iter()
        .enumerate()
        .rev()
    {
        match &child
            .item
            .kind
        {
            BlockKind::Paragraph { lines } => {
                stack.push(Step::Inline(lines));
                let after_block = i > 0
                    && !matches!(
                        node.children[i - 1]
                            .item
                            .kind,
                        BlockKind::Paragraph { .. }
                    );
                if after_block {
                    stack.push(Step::Literal("\n"));
                }
            }
            _ => {
                stack.push(Step::Block(child));
                stack.push(Step::Literal("\n"));
            }
        }
    }
}

fn first_index(list: &Tree<Block>) -> Option<u64> {
    match list
        .children
        .first()?
        .item
        .kind
    {
        BlockKind::ListItem { index } => index,
        _ => None,
    }
}
