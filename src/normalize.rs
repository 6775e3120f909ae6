//! Whitespace normalization and length measurement.
//!
//! Input text arrives from editors, files and clipboards with every kind of
//! whitespace: tabs, `\r\n` line endings, runs of blank lines, non-breaking
//! spaces. Before packing, all of it is reduced to two separators:
//!
//! ```text
//! "  Hello,\tworld!\r\n\r\n\r\nSecond   paragraph.\n"
//!                    ↓
//! "Hello, world!\n\nSecond paragraph."
//! ```
//!
//! - A whitespace run with two or more line breaks becomes [`PARAGRAPH_BREAK`].
//! - Any other whitespace run becomes a single space.
//! - Leading and trailing whitespace is dropped.
//!
//! The paragraph marker is ordinary content for length purposes: it costs two
//! characters wherever it ends up inside a segment.
//!
//! ## Length Unit
//!
//! Every length in this crate is a count of Unicode code points ([`char_len`]).
//! Not bytes, not grapheme clusters. A flag emoji or a ZWJ family sequence is
//! one glyph on screen but several units here.

/// The normalized form of a paragraph break.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Length of `s` in Unicode code points.
///
/// ```rust
/// use threadsplit::char_len;
///
/// assert_eq!(char_len("héllo"), 5);
/// assert_eq!("héllo".len(), 6); // bytes
/// ```
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Normalize whitespace in `text`.
///
/// Idempotent, and never touches non-whitespace code points.
///
/// ```rust
/// use threadsplit::normalize;
///
/// let doc = normalize("  one\t two\r\n\r\nthree  ");
/// assert_eq!(doc, "one two\n\nthree");
/// assert_eq!(normalize(&doc), doc);
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_gap = false;
    let mut breaks = 0usize;

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            in_gap = true;
            breaks += line_breaks(c, chars.peek().copied());
            continue;
        }

        if in_gap && !out.is_empty() {
            if breaks >= 2 {
                out.push_str(PARAGRAPH_BREAK);
            } else {
                out.push(' ');
            }
        }
        in_gap = false;
        breaks = 0;
        out.push(c);
    }

    out
}

/// How many line breaks the whitespace character `c` contributes.
///
/// `\r\n` counts once: the `\r` yields to the `\n` that follows it.
fn line_breaks(c: char, next: Option<char>) -> usize {
    match c {
        '\r' if next == Some('\n') => 0,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' => 1,
        '\u{2029}' => 2,
        _ => 0,
    }
}
