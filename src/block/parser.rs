//! Block parser implementation.

use crate::Options;
use crate::inline::InlineTransformer;

use super::fragment::{Block, ListItems};
use super::line::{LineKind, classify_line};

/// Block parser state.
pub struct BlockParser<'a> {
    /// Input text.
    input: &'a str,
    /// Rendering options.
    options: Options,
    /// Inline transformer, reused across lines.
    inline: InlineTransformer,
    /// Open bullet list group, if any.
    list: Option<ListItems>,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser with default options.
    pub fn new(input: &'a str) -> Self {
        Self::new_with_options(input, Options::default())
    }

    /// Create a new block parser with options.
    pub fn new_with_options(input: &'a str, options: Options) -> Self {
        Self {
            input,
            options,
            inline: InlineTransformer::new(),
            list: None,
        }
    }

    /// Parse all lines and collect blocks.
    pub fn parse(&mut self, blocks: &mut Vec<Block>) {
        if self.input.is_empty() {
            return;
        }

        let input = self.input;
        for line in input.split('\n') {
            // A byte order mark is not whitespace to `str::trim`
            let line = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
            self.parse_line(line, blocks);
        }

        // Close any open list at end of input
        self.flush_list(blocks);
    }

    /// Parse a single trimmed line.
    fn parse_line(&mut self, line: &str, blocks: &mut Vec<Block>) {
        match classify_line(line) {
            LineKind::Blank => {
                self.flush_list(blocks);
                // One separator per blank run, none before the first block
                if blocks.last().is_some_and(|last| !last.is_blank()) {
                    blocks.push(Block::Blank);
                }
            }
            LineKind::Heading { level, content } => {
                self.flush_list(blocks);
                let content = self.render_inline(content);
                blocks.push(Block::Heading { level, content });
            }
            LineKind::UnorderedItem(content) => {
                let item = self.render_inline(content);
                self.list.get_or_insert_with(ListItems::new).push(item);
            }
            LineKind::OrderedItem(content) | LineKind::Text(content) => {
                self.flush_list(blocks);
                let content = self.render_inline(content);
                blocks.push(Block::Paragraph(content));
            }
        }
    }

    /// Close the open list group, emitting it as one block.
    fn flush_list(&mut self, blocks: &mut Vec<Block>) {
        if let Some(items) = self.list.take() {
            debug_assert!(!items.is_empty());
            blocks.push(Block::List(items));
        }
    }

    #[inline]
    fn render_inline(&mut self, content: &str) -> String {
        self.inline.transform(content, self.options.escape_html)
    }
}
