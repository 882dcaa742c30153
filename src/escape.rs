//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for the first escapable character and
//! borrows the input unchanged when there is none, otherwise bulk-copies
//! the segments between escapes.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

/// Lookup table for escapable characters in text content.
/// Index by byte value, true if needs escaping.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into an output buffer.
///
/// Escapes `<`, `>`, `&` and `"` to their HTML entity equivalents.
/// Markdown delimiters (`*`, `_`, `` ` ``) pass through untouched, so
/// escaping before inline processing does not change which spans match.
///
/// # Example
/// ```
/// use knockdown::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let mut pos = match first_text_escape(bytes) {
        Some(p) => p,
        None => {
            out.push_str(input);
            return;
        }
    };

    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        // Escapable bytes are ASCII, so every split point is a char boundary
        let scan_start = pos;
        while pos < bytes.len() && !TEXT_ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }

        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            out.push_str(match bytes[pos] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                _ => "&quot;",
            });
            pos += 1;
        }
    }
}

/// Escape text content, borrowing the input when nothing needs escaping.
///
/// # Example
/// ```
/// use std::borrow::Cow;
/// use knockdown::escape::escape_text;
///
/// assert!(matches!(escape_text("plain"), Cow::Borrowed("plain")));
/// assert_eq!(escape_text("a & b"), "a &amp; b");
/// ```
pub fn escape_text(input: &str) -> Cow<'_, str> {
    if !needs_text_escape(input.as_bytes()) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + input.len() / 8 + 8);
    escape_text_into(&mut out, input);
    Cow::Owned(out)
}

/// Check if a byte slice needs any escaping for text content.
#[inline]
pub fn needs_text_escape(input: &[u8]) -> bool {
    first_text_escape(input).is_some()
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
