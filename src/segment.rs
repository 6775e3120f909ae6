//! The Segment type: a finished, numbered piece of a thread.

use crate::normalize::char_len;
use crate::suffix::{render_suffix, suffix_length};

/// Chunk content plus its position in the thread.
///
/// Renders as `"{content} {position}/{total}"` through [`Display`](std::fmt::Display):
///
/// ```rust
/// use threadsplit::Segment;
///
/// let segment = Segment::new("delta epsilon", 2, 2);
/// assert_eq!(segment.to_string(), "delta epsilon 2/2");
/// assert_eq!(segment.rendered_len(), 17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The content, without suffix.
    pub content: String,
    /// One-based position in the thread.
    pub position: usize,
    /// Number of segments in the thread.
    pub total: usize,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(content: impl Into<String>, position: usize, total: usize) -> Self {
        Self {
            content: content.into(),
            position,
            total,
        }
    }

    /// The suffix, `" i/n"`.
    #[must_use]
    pub fn suffix(&self) -> String {
        render_suffix(self.position, self.total)
    }

    /// Rendered length in code points, suffix included.
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        char_len(&self.content) + suffix_length(self.position, self.total)
    }

    /// Whether this is the last segment of its thread.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position == self.total
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}/{}", self.content, self.position, self.total)
    }
}

impl From<Segment> for String {
    fn from(segment: Segment) -> Self {
        segment.to_string()
    }
}
