//! Emphasis and strong emphasis resolution.
//!
//! Strong runs (`**x**`, `__x__`) are resolved first, by repeating whole
//! left-to-right passes until a pass changes nothing. Emphasis (`*x*`,
//! `_x_`) is a single pass afterwards that refuses to wrap anything
//! already containing a `<strong>` tag.
//!
//! The two delimiter characters are resolved independently of each other.

use memchr::{memchr, memchr2};

use crate::limits::MAX_EMPHASIS_PASSES;

const STRONG_OPEN: &str = "<strong>";
const STRONG_CLOSE: &str = "</strong>";
const EM_OPEN: &str = "<em>";
const EM_CLOSE: &str = "</em>";

/// Resolve doubled-delimiter strong spans to a fixed point.
///
/// Stops early once a pass produces no replacement, and after
/// [`MAX_EMPHASIS_PASSES`] passes regardless; leftover markers stay literal.
pub fn resolve_strong(text: String, delim: u8) -> String {
    debug_assert!(delim == b'*' || delim == b'_');
    let mut html = text;
    for _ in 0..MAX_EMPHASIS_PASSES {
        match strong_pass(&html, delim) {
            Some(next) => html = next,
            None => return html,
        }
    }
    trace_event!(
        debug,
        delim = %char::from(delim),
        passes = MAX_EMPHASIS_PASSES,
        "strong emphasis pass cap reached"
    );
    html
}

/// One left-to-right pass replacing `DDcontentDD` with `<strong>content</strong>`.
///
/// Content is one or more bytes, none equal to the delimiter. Returns `None`
/// when nothing matched.
fn strong_pass(text: &str, delim: u8) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(open) = memchr(delim, &bytes[pos..]).map(|i| pos + i) {
        if bytes.get(open + 1) != Some(&delim) {
            pos = open + 1;
            continue;
        }
        let content_start = open + 2;
        let Some(close) = memchr(delim, &bytes[content_start..]).map(|i| content_start + i) else {
            break;
        };
        if close == content_start || bytes.get(close + 1) != Some(&delim) {
            // No match at this opener; retry one byte later
            pos = open + 1;
            continue;
        }

        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 32));
        buf.push_str(&text[copied..open]);
        buf.push_str(STRONG_OPEN);
        buf.push_str(&text[content_start..close]);
        buf.push_str(STRONG_CLOSE);

        copied = close + 2;
        pos = copied;
    }

    out.map(|mut buf| {
        buf.push_str(&text[copied..]);
        buf
    })
}

/// One left-to-right pass replacing `DcontentD` with `<em>content</em>`.
///
/// Content is one or more bytes, none equal to the delimiter or a newline.
/// A match is copied through unchanged when it would wrap an already
/// resolved strong span, and scanning resumes after it.
pub fn resolve_emphasis(text: String, delim: u8) -> String {
    debug_assert!(delim == b'*' || delim == b'_');
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(open) = memchr(delim, &bytes[pos..]).map(|i| pos + i) {
        let content_start = open + 1;
        let Some(close) = memchr2(delim, b'\n', &bytes[content_start..]).map(|i| content_start + i)
        else {
            break;
        };
        if bytes[close] == b'\n' {
            pos = close + 1;
            continue;
        }
        if close == content_start {
            pos = content_start;
            continue;
        }

        let span = &text[open..=close];
        let content = &text[content_start..close];
        if !wraps_strong(span, content, delim) {
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
            buf.push_str(&text[copied..open]);
            buf.push_str(EM_OPEN);
            buf.push_str(content);
            buf.push_str(EM_CLOSE);
            copied = close + 1;
        }
        pos = close + 1;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            buf
        }
        None => text,
    }
}

/// Whether an emphasis match overlaps strong emphasis: the span holds a
/// doubled delimiter or the content holds a resolved `<strong>` tag.
#[inline]
fn wraps_strong(span: &str, content: &str, delim: u8) -> bool {
    let doubled = span.as_bytes().windows(2).any(|w| w == [delim, delim]);
    doubled || content.contains(STRONG_OPEN)
}
