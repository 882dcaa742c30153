//! HTML output writer.
//!
//! Block content arrives already rendered by the inline transformer, so the
//! writer only supplies the block-level tags around it.

use crate::block::Block;

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use knockdown::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(1000);
/// writer.paragraph_start();
/// writer.write_str("Hello");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "<p>Hello</p>");
/// ```
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical output is ~1.25x input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Get mutable reference to internal buffer.
    ///
    /// Use with caution - allows bypassing the block helpers.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.out
    }

    // --- Block Helpers ---

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=3).contains(&level));
        self.write_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=3).contains(&level));
        self.write_str("</h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write list start: `<ul>`
    #[inline]
    pub fn ul_start(&mut self) {
        self.write_str("<ul>");
    }

    /// Write list end: `</ul>`
    #[inline]
    pub fn ul_end(&mut self) {
        self.write_str("</ul>");
    }

    /// Write list item start: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.write_str("<li>");
    }

    /// Write list item end: `</li>`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>");
    }

    /// Write the blank-line separator: `<br>`
    #[inline]
    pub fn blank_separator(&mut self) {
        self.write_str("<br>");
    }

    /// Write one block fragment.
    pub fn write_block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, content } => {
                self.heading_start(*level);
                self.write_str(content);
                self.heading_end(*level);
            }
            Block::Paragraph(content) => {
                self.paragraph_start();
                self.write_str(content);
                self.paragraph_end();
            }
            Block::List(items) => {
                self.ul_start();
                for item in items {
                    self.li_start();
                    self.write_str(item);
                    self.li_end();
                }
                self.ul_end();
            }
            Block::Blank => self.blank_separator(),
        }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Write for HtmlWriter {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}
