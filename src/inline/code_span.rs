//! Code span protection.
//!
//! Code spans have highest precedence among inline elements: they are cut
//! out of the line before emphasis resolution and put back afterwards, so
//! `*` and `_` inside backticks are never interpreted.
//!
//! A span is a backtick, one or more non-backtick characters, and the next
//! backtick. Each span is replaced by a placeholder `D<index>D`, where the
//! delimiter `D` is a private-use character repeated often enough that `D`
//! never occurs in the line. Usually that is one character the line does
//! not contain. When the line holds the whole private-use plane, `D` is
//! U+E000 repeated one more time than its longest run in the line.
//! Emphasis resolution only inserts tags and never touches `D` or digits,
//! so every placeholder survives intact until restoration.

use std::fmt::Write;

use memchr::memchr;
use smallvec::SmallVec;

/// First code point of the private-use plane searched for a delimiter.
const PLANE_START: u32 = 0xE000;
/// Number of code points in the plane (U+E000 to U+F8FF).
const PLANE_LEN: usize = 0x1900;
/// Delimiter character when every plane character occurs in the line.
const FALLBACK: char = '\u{E000}';

/// Placeholder delimiter: `ch` repeated `width` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delimiter {
    ch: char,
    width: usize,
}

impl Delimiter {
    fn push_into(self, out: &mut String) {
        out.extend(std::iter::repeat_n(self.ch, self.width));
    }
}

/// Per-line table of extracted code spans.
#[derive(Debug, Default)]
pub struct CodeSpanTable {
    /// Placeholder delimiter for the current line.
    delimiter: Option<Delimiter>,
    /// Span contents, indexed by placeholder number.
    spans: SmallVec<[String; 4]>,
}

impl CodeSpanTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of spans extracted from the current line.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if no spans were extracted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Replace every code span in `text` with a placeholder.
    ///
    /// Resets the table, so placeholder numbering starts at zero per line.
    /// Unterminated backticks stay literal.
    pub fn extract(&mut self, text: &str) -> String {
        self.spans.clear();
        self.delimiter = None;

        let bytes = text.as_bytes();
        if memchr(b'`', bytes).is_none() {
            return text.to_owned();
        }

        let delimiter = choose_delimiter(text);
        if delimiter.width > 1 {
            trace_event!(
                debug,
                width = delimiter.width,
                "private-use plane exhausted, widening placeholder delimiter"
            );
        }
        self.delimiter = Some(delimiter);

        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut search = 0;

        while let Some(open) = memchr(b'`', &bytes[search..]).map(|i| search + i) {
            let Some(close) = memchr(b'`', &bytes[open + 1..]).map(|i| open + 1 + i) else {
                break;
            };
            if close == open + 1 {
                // Empty content: the second backtick may still open a span
                search = close;
                continue;
            }

            out.push_str(&text[copied..open]);
            delimiter.push_into(&mut out);
            // Writing into a String cannot fail
            let _ = write!(out, "{}", self.spans.len());
            delimiter.push_into(&mut out);
            self.spans.push(text[open + 1..close].to_owned());

            copied = close + 1;
            search = copied;
        }

        out.push_str(&text[copied..]);
        out
    }

    /// Replace every placeholder in `html` with its `<code>` fragment.
    pub fn restore(&self, html: String) -> String {
        let Some(delimiter) = self.delimiter else {
            return html;
        };
        if self.spans.is_empty() {
            return html;
        }

        let ch = delimiter.ch;
        let mut out = String::with_capacity(html.len() + self.spans.len() * 13);
        let mut rest = html.as_str();

        while let Some(start) = rest.find(ch) {
            out.push_str(&rest[..start]);
            let run = rest[start..].chars().take_while(|&c| c == ch).count();
            let after = &rest[start + run * ch.len_utf8()..];

            // Literal delimiter characters may directly precede an opener
            let literal = run.saturating_sub(delimiter.width);
            out.extend(std::iter::repeat_n(ch, literal));

            let placeholder = if run >= delimiter.width {
                parse_placeholder(after, delimiter)
                    .and_then(|(index, len)| self.spans.get(index).map(|code| (code, len)))
            } else {
                None
            };

            match placeholder {
                Some((code, len)) => {
                    out.push_str("<code>");
                    out.push_str(code);
                    out.push_str("</code>");
                    rest = &after[len..];
                }
                None => {
                    // Not a placeholder we issued; keep the characters
                    out.extend(std::iter::repeat_n(ch, run - literal));
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Parse `<digits><delimiter>` at the start of `text`.
/// Returns the index and the consumed byte length.
fn parse_placeholder(text: &str, delimiter: Delimiter) -> Option<(usize, usize)> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let closing = text[digits..]
        .chars()
        .take(delimiter.width)
        .filter(|&c| c == delimiter.ch)
        .count();
    if closing != delimiter.width {
        return None;
    }
    let index = text[..digits].parse().ok()?;
    Some((index, digits + delimiter.width * delimiter.ch.len_utf8()))
}

/// Pick a placeholder delimiter that does not occur in `text`, in one pass.
fn choose_delimiter(text: &str) -> Delimiter {
    let mut seen = [0u64; PLANE_LEN / 64];
    let mut run = 0usize;
    let mut longest_run = 0usize;

    for c in text.chars() {
        let offset = (c as u32).wrapping_sub(PLANE_START) as usize;
        if offset < PLANE_LEN {
            seen[offset / 64] |= 1 << (offset % 64);
        }
        if c == FALLBACK {
            run += 1;
            longest_run = longest_run.max(run);
        } else {
            run = 0;
        }
    }

    (0..PLANE_LEN)
        .find(|&i| seen[i / 64] & (1 << (i % 64)) == 0)
        .and_then(|i| char::from_u32(PLANE_START + i as u32))
        .map(|ch| Delimiter { ch, width: 1 })
        .unwrap_or(Delimiter {
            ch: FALLBACK,
            width: longest_run + 1,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(text: &str) -> String {
        let mut table = CodeSpanTable::new();
        let protected = table.extract(text);
        table.restore(protected)
    }

    /// Every private-use plane character once, in order.
    fn whole_plane() -> String {
        (0xE000..=0xF8FF).filter_map(char::from_u32).collect()
    }

    #[test]
    fn test_simple_code_span() {
        let mut table = CodeSpanTable::new();
        let protected = table.extract("hello `code` world");
        assert_eq!(table.len(), 1);
        assert!(!protected.contains('`'));
        assert!(!protected.contains("code"));
        assert_eq!(table.restore(protected), "hello <code>code</code> world");
    }

    #[test]
    fn test_multiple_code_spans() {
        assert_eq!(roundtrip("`a` and `b`"), "<code>a</code> and <code>b</code>");
    }

    #[test]
    fn test_adjacent_code_spans() {
        assert_eq!(roundtrip("`a``b`"), "<code>a</code><code>b</code>");
    }

    #[test]
    fn test_unterminated_backtick() {
        let mut table = CodeSpanTable::new();
        assert_eq!(table.extract("hello `code"), "hello `code");
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_backtick_pair_shifts_opener() {
        // "``a`" matches from the second backtick
        assert_eq!(roundtrip("``a`"), "`<code>a</code>");
        assert_eq!(roundtrip("``"), "``");
    }

    #[test]
    fn test_odd_backtick_left_literal() {
        assert_eq!(roundtrip("`a` b `c"), "<code>a</code> b `c");
    }

    #[test]
    fn test_emphasis_markers_hidden() {
        let mut table = CodeSpanTable::new();
        let protected = table.extract("`*not emphasis*`");
        assert!(!protected.contains('*'));
    }

    #[test]
    fn test_placeholder_avoids_existing_private_use_chars() {
        let text = "\u{E000}0\u{E000} `x`";
        assert_eq!(choose_delimiter(text), Delimiter { ch: '\u{E001}', width: 1 });
        assert_eq!(roundtrip(text), "\u{E000}0\u{E000} <code>x</code>");
    }

    #[test]
    fn test_many_spans_all_protected() {
        let line = "`x` ".repeat(1100) + "`*a*`";
        let mut table = CodeSpanTable::new();
        let protected = table.extract(&line);
        assert_eq!(table.len(), 1101);
        assert!(!protected.contains('*'));
        assert!(table.restore(protected).ends_with("<code>*a*</code>"));
    }

    #[test]
    fn test_exhausted_plane_widens_delimiter() {
        let line = format!("{}\u{E000}\u{E000} `a*b*`", whole_plane());
        assert_eq!(choose_delimiter(&line), Delimiter { ch: '\u{E000}', width: 3 });

        let mut table = CodeSpanTable::new();
        let protected = table.extract(&line);
        assert_eq!(table.len(), 1);
        assert!(!protected.contains('*'));
        assert_eq!(
            table.restore(protected),
            format!("{}\u{E000}\u{E000} <code>a*b*</code>", whole_plane())
        );
    }

    #[test]
    fn test_exhausted_plane_with_delimiter_chars_next_to_spans() {
        let line = format!("{}\u{E000}`a`\u{E000}`b`0\u{E000}", whole_plane());
        assert_eq!(
            roundtrip(&line),
            format!(
                "{}\u{E000}<code>a</code>\u{E000}<code>b</code>0\u{E000}",
                whole_plane()
            )
        );
    }

    #[test]
    fn test_numbering_resets_per_line() {
        let mut table = CodeSpanTable::new();
        let _ = table.extract("`a` `b`");
        assert_eq!(table.len(), 2);
        let protected = table.extract("`c`");
        assert_eq!(table.len(), 1);
        assert_eq!(table.restore(protected), "<code>c</code>");
    }

    #[test]
    fn test_restore_without_spans_is_identity() {
        let table = CodeSpanTable::new();
        assert_eq!(table.restore("plain".to_owned()), "plain");
    }
}
