//! Block-level classifier.
//!
//! The block parser is line-oriented and handles:
//! - ATX headings (levels 1-3)
//! - Bullet list groups
//! - Numbered lines (rendered as paragraphs)
//! - Blank-line separators
//! - Paragraphs

mod fragment;
mod line;
mod parser;

pub use fragment::{Block, ListItems};
pub use line::{LineKind, classify_line};
pub use parser::BlockParser;

/// Post-process blocks before rendering.
///
/// Collapses every run of three or more blank separators to two, then drops
/// paragraphs whose content is empty or whitespace-only. Blank runs are
/// collapsed first, so removing an empty paragraph never re-triggers it.
pub fn normalize(blocks: &mut Vec<Block>) {
    let mut blank_run = 0usize;
    blocks.retain(|block| {
        if block.is_blank() {
            blank_run += 1;
            blank_run <= 2
        } else {
            blank_run = 0;
            true
        }
    });

    blocks.retain(|block| !block.is_empty_paragraph());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(s: &str) -> Block {
        Block::Paragraph(s.into())
    }

    #[test]
    fn test_collapse_blank_runs() {
        let mut blocks = vec![
            para("a"),
            Block::Blank,
            Block::Blank,
            Block::Blank,
            Block::Blank,
            para("b"),
        ];
        normalize(&mut blocks);
        assert_eq!(blocks, vec![para("a"), Block::Blank, Block::Blank, para("b")]);
    }

    #[test]
    fn test_two_blanks_kept() {
        let mut blocks = vec![Block::Blank, Block::Blank, para("x")];
        normalize(&mut blocks);
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_drop_empty_paragraphs() {
        let mut blocks = vec![para(""), para("  "), para("keep")];
        normalize(&mut blocks);
        assert_eq!(blocks, vec![para("keep")]);
    }

    #[test]
    fn test_empty_paragraph_removed_after_collapse() {
        let mut blocks = vec![
            Block::Blank,
            Block::Blank,
            para(""),
            Block::Blank,
        ];
        normalize(&mut blocks);
        assert_eq!(blocks, vec![Block::Blank, Block::Blank, Block::Blank]);
    }
}
