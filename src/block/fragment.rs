//! Block fragment types.

use smallvec::SmallVec;

/// Rendered items of one bullet list group.
pub type ListItems = SmallVec<[String; 8]>;

/// One emitted block. Content is inline HTML, ready to be wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `<h1>` to `<h3>`.
    Heading {
        /// Heading level (1-3).
        level: u8,
        /// Inline HTML content.
        content: String,
    },
    /// `<p>`, also used for numbered lines.
    Paragraph(String),
    /// `<ul>` holding one `<li>` per item. Never empty.
    List(ListItems),
    /// `<br>` separator for a blank source line.
    Blank,
}

impl Block {
    /// Whether this is a blank-line separator.
    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Whether this is a paragraph with empty or whitespace-only content.
    #[inline]
    pub fn is_empty_paragraph(&self) -> bool {
        match self {
            Self::Paragraph(content) => content.trim().is_empty(),
            _ => false,
        }
    }
}
