//! Inline transformer.
//!
//! Works on one line at a time, in a fixed order:
//! 1. Code spans are swapped out for placeholders
//! 2. Strong emphasis (`**`, then `__`) is resolved to a fixed point
//! 3. Emphasis (`*`, then `_`) is resolved in a single guarded pass
//! 4. Placeholders are swapped back for `<code>` fragments

mod code_span;
mod emphasis;

pub use code_span::CodeSpanTable;
pub use emphasis::{resolve_emphasis, resolve_strong};

use memchr::memchr3;

use crate::escape;

/// Inline transformer state.
///
/// Holds the per-line placeholder table so its allocation is reused across
/// the lines of one document. The table is reset at the start of every line.
#[derive(Debug, Default)]
pub struct InlineTransformer {
    code_spans: CodeSpanTable,
}

impl InlineTransformer {
    /// Create a new inline transformer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform one line of Markdown into inline HTML.
    ///
    /// With `escape_html`, markup characters from the input are escaped
    /// first. Never fails; unmatched markers are kept as literal text.
    pub fn transform(&mut self, line: &str, escape_html: bool) -> String {
        let text = if escape_html {
            escape::escape_text(line)
        } else {
            line.into()
        };

        // No delimiter at all: nothing to resolve
        if memchr3(b'`', b'*', b'_', text.as_bytes()).is_none() {
            return text.into_owned();
        }

        let mut html = self.code_spans.extract(&text);
        html = resolve_strong(html, b'*');
        html = resolve_strong(html, b'_');
        html = resolve_emphasis(html, b'*');
        html = resolve_emphasis(html, b'_');
        self.code_spans.restore(html)
    }
}
