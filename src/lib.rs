//! knockdown: lightweight Markdown to HTML renderer for AI-generated text
//!
//! Renders the constrained Markdown dialect that language models produce
//! for portfolio commentary and chat answers: `#`/`##`/`###` headings,
//! `-`/`*` bullet lists, numbered lines, `**strong**`/`__strong__`,
//! `*em*`/`_em_` and `` `code` ``.
//!
//! # Design Principles
//! - Two passes: line-level block classification, then per-line inline spans
//! - No regex: byte-level scanning with `memchr`
//! - Total: every input renders, malformed markers stay literal
//! - Bounded: emphasis resolution is capped per line (see [`limits`])

// Structured logging, compiled in only with the `trace` feature.
#[cfg(feature = "trace")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub mod block;
pub mod escape;
pub mod inline;
pub mod limits;
pub mod render;

// Re-export primary types
pub use block::{Block, BlockParser, LineKind, classify_line, normalize};
pub use inline::InlineTransformer;
pub use render::HtmlWriter;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Escape `<`, `>`, `&` and `"` found in the input before inline
    /// processing, so the only tags in the output are the ones the renderer
    /// emits. Disable only for trusted input that carries its own markup.
    pub escape_html: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { escape_html: true }
    }
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = knockdown::to_html("# Title\n\nBody");
/// assert_eq!(html, "<h1>Title</h1><br><p>Body</p>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first. This avoids allocation if it already has
/// sufficient capacity.
pub fn to_html_into(input: &str, out: &mut String) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML into a provided buffer with options.
pub fn to_html_into_with_options(input: &str, out: &mut String, options: &Options) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::with_capacity(0);
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(input, &mut writer, options);
    std::mem::swap(writer.buffer_mut(), out);
}

/// Render the inline spans of a single line (no block wrapping).
///
/// # Example
/// ```
/// assert_eq!(
///     knockdown::transform_inline("*a* **b**"),
///     "<em>a</em> <strong>b</strong>"
/// );
/// ```
pub fn transform_inline(line: &str) -> String {
    transform_inline_with_options(line, &Options::default())
}

/// Render the inline spans of a single line with options.
pub fn transform_inline_with_options(line: &str, options: &Options) -> String {
    InlineTransformer::new().transform(line, options.escape_html)
}

/// Render Markdown to an HtmlWriter.
fn render_to_writer(input: &str, writer: &mut HtmlWriter, options: &Options) {
    if input.is_empty() {
        return;
    }

    let mut parser = BlockParser::new_with_options(input, *options);
    let mut blocks = Vec::with_capacity((input.len() / 32).max(16));
    parser.parse(&mut blocks);

    // Collapse blank runs, drop empty paragraphs
    normalize(&mut blocks);

    for block in &blocks {
        writer.write_block(block);
    }

    trace_event!(
        trace,
        input_len = input.len(),
        blocks = blocks.len(),
        output_len = writer.len(),
        "rendered markdown"
    );
}
