//! The Chunk type: segment content before its suffix is attached.

use crate::normalize::char_len;

/// A piece of the normalized document, without a positional suffix.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the text the packer was given,
/// not character indices. This matches Rust's string slicing semantics:
///
/// ```rust
/// use threadsplit::Chunk;
///
/// let doc = "Hello, world!";
/// let chunk = Chunk::new("world!", 7, 13, 0);
///
/// assert_eq!(&doc[chunk.span()], chunk.text);
/// ```
///
/// Chunks never overlap. Adjacent chunks are separated by the single space or
/// paragraph break the packer dropped at the boundary, or by nothing when a
/// long word was hard-split between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text.
    pub text: String,
    /// Byte offset where this chunk starts in the packed text.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the packed text.
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this chunk in code points.
    #[must_use]
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this chunk in the packed text.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, span: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}
