//! Line classification.
//!
//! Each predicate looks only at the trimmed line. Evaluation order matters:
//! `###` is tested before `##` before `#`, and headings before list markers.

/// Block kind of a single trimmed line, borrowing its inline payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Whitespace-only line.
    Blank,
    /// `# `, `## ` or `### ` heading.
    Heading {
        /// Heading level (1-3).
        level: u8,
        /// Text after the marker and its space.
        content: &'a str,
    },
    /// `- ` or `* ` bullet.
    UnorderedItem(&'a str),
    /// Digits followed by `. `; the number itself is dropped.
    OrderedItem(&'a str),
    /// Anything else.
    Text(&'a str),
}

/// Classify an already trimmed line.
///
/// # Example
/// ```
/// use knockdown::{classify_line, LineKind};
///
/// assert_eq!(classify_line("## Outlook"), LineKind::Heading { level: 2, content: "Outlook" });
/// assert_eq!(classify_line("- AAPL"), LineKind::UnorderedItem("AAPL"));
/// assert_eq!(classify_line("12. Sell"), LineKind::OrderedItem("Sell"));
/// ```
pub fn classify_line(trimmed: &str) -> LineKind<'_> {
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some((level, content)) = heading(trimmed) {
        return LineKind::Heading { level, content };
    }
    if let Some(content) = unordered_item(trimmed) {
        return LineKind::UnorderedItem(content);
    }
    if let Some(content) = ordered_item(trimmed) {
        return LineKind::OrderedItem(content);
    }
    LineKind::Text(trimmed)
}

#[inline]
fn heading(line: &str) -> Option<(u8, &str)> {
    [(3, "### "), (2, "## "), (1, "# ")]
        .into_iter()
        .find_map(|(level, marker)| line.strip_prefix(marker).map(|rest| (level, rest)))
}

#[inline]
fn unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

#[inline]
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}
