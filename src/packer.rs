//! Greedy word-boundary packing.
//!
//! Packing turns a normalized document into chunks that each fit a content
//! limit, breaking only between words whenever possible.
//!
//! ## The Algorithm
//!
//! ```text
//! max_len = 16
//!
//! words:  alpha · beta · gamma · delta · epsilon
//!
//! "alpha"                 5
//! "alpha beta"           10
//! "alpha beta gamma"     16   <- exactly full
//! "alpha beta gamma delta"    22 > 16, close chunk
//! "delta"                 5
//! "delta epsilon"        13   <- end of input, close chunk
//! ```
//!
//! A word is appended together with the separator that preceded it in the
//! document: a space, or the two-character paragraph break. The separator
//! counts toward the limit like any other content. At a chunk start the
//! separator is dropped.
//!
//! ## Long Words
//!
//! A word longer than the limit cannot share a chunk and cannot fit alone.
//! It closes the current chunk and is cut by [`CharSplitter`] into pieces of
//! exactly `max_len` code points:
//!
//! ```text
//! max_len = 4, word = "abcdefghij"
//!
//! "abcd" | "efgh" | "ij…"  <- last piece keeps accumulating words
//! ```
//!
//! Every word either extends or closes a chunk, so packing always makes
//! progress, even on a single word of 10,000 characters.

use crate::normalize::char_len;
use crate::Chunk;

/// A strategy for cutting text into bounded chunks.
///
/// ```rust
/// use threadsplit::{CharSplitter, Packer, WordPacker};
///
/// fn count(packer: &dyn Packer, text: &str) -> usize {
///     packer.pack(text).len()
/// }
///
/// assert_eq!(count(&WordPacker::new(10), "one two three"), 2);
/// assert_eq!(count(&CharSplitter::new(5), "one two three"), 3);
/// ```
pub trait Packer: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each [`Chunk`] holds a slice of `text` and its byte offsets in it.
    fn pack(&self, text: &str) -> Vec<Chunk>;

    /// Estimate the number of chunks for a text of `text_len` code points.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize;
}

/// Hard splitter: maximal pieces of a fixed number of code points.
///
/// Ignores word boundaries entirely. Used by [`WordPacker`] for words that
/// exceed the content limit on their own.
///
/// ```rust
/// use threadsplit::{CharSplitter, Packer};
///
/// let chunks = CharSplitter::new(4).pack("abcdefghij");
/// let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
/// assert_eq!(texts, ["abcd", "efgh", "ij"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CharSplitter {
    size: usize,
}

impl CharSplitter {
    /// Create a splitter producing pieces of `size` code points.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "piece size must be > 0");
        Self { size }
    }

    /// The piece size in code points.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Packer for CharSplitter {
    fn pack(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return vec![];
        }

        let mut chunks = Vec::with_capacity(self.estimate_chunks(char_len(text)));
        let mut start = 0;
        let mut count = 0;

        for (i, _) in text.char_indices() {
            if count == self.size {
                chunks.push(Chunk::new(&text[start..i], start, i, chunks.len()));
                start = i;
                count = 0;
            }
            count += 1;
        }

        if start < text.len() {
            chunks.push(Chunk::new(&text[start..], start, text.len(), chunks.len()));
        }

        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        text_len.div_ceil(self.size)
    }
}

/// Greedy packer that breaks between words.
///
/// ## Example
///
/// ```rust
/// use threadsplit::{Packer, WordPacker};
///
/// let chunks = WordPacker::new(16).pack("alpha beta gamma delta epsilon");
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text, "alpha beta gamma");
/// assert_eq!(chunks[1].text, "delta epsilon");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordPacker {
    max_len: usize,
    splitter: CharSplitter,
}

impl WordPacker {
    /// Create a packer whose chunks hold at most `max_len` code points.
    ///
    /// # Panics
    ///
    /// Panics if `max_len == 0`.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        assert!(max_len > 0, "max_len must be > 0");
        Self {
            max_len,
            splitter: CharSplitter::new(max_len),
        }
    }

    /// The content limit in code points.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Packer for WordPacker {
    fn pack(&self, text: &str) -> Vec<Chunk> {
        let mut chunks = Vec::with_capacity(self.estimate_chunks(char_len(text)));
        let mut open: Option<Open> = None;

        for word in words(text) {
            if word.len > self.max_len {
                if let Some(prev) = open.take() {
                    close(&mut chunks, text, prev);
                }

                tracing::trace!(
                    offset = word.start,
                    len = word.len,
                    max_len = self.max_len,
                    "hard-splitting long word"
                );

                let mut pieces = self.splitter.pack(&text[word.start..word.end]);
                let last = pieces.pop();
                for piece in pieces {
                    let (start, end) = (word.start + piece.start, word.start + piece.end);
                    chunks.push(Chunk::new(&text[start..end], start, end, chunks.len()));
                }
                open = last.map(|piece| Open {
                    start: word.start + piece.start,
                    end: word.start + piece.end,
                    len: piece.len(),
                });
                continue;
            }

            open = match open {
                Some(cur) if cur.len + word.gap + word.len <= self.max_len => Some(Open {
                    end: word.end,
                    len: cur.len + word.gap + word.len,
                    ..cur
                }),
                Some(cur) => {
                    close(&mut chunks, text, cur);
                    Some(Open::from(&word))
                }
                None => Some(Open::from(&word)),
            };
        }

        if let Some(cur) = open {
            close(&mut chunks, text, cur);
        }

        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.max_len).max(1)
    }
}

/// Pack `document` into chunks of at most `max_content_len` code points.
///
/// Shorthand for `WordPacker::new(max_content_len).pack(document)`.
///
/// # Panics
///
/// Panics if `max_content_len == 0`.
#[must_use]
pub fn pack(document: &str, max_content_len: usize) -> Vec<Chunk> {
    WordPacker::new(max_content_len).pack(document)
}

/// A maximal run of non-whitespace, with the width of the gap before it.
#[derive(Debug)]
struct Word {
    start: usize,
    end: usize,
    /// Length in code points.
    len: usize,
    /// Code points of whitespace between the previous word and this one.
    gap: usize,
}

/// The chunk currently being accumulated.
#[derive(Debug, Clone, Copy)]
struct Open {
    start: usize,
    end: usize,
    len: usize,
}

impl From<&Word> for Open {
    fn from(word: &Word) -> Self {
        Self {
            start: word.start,
            end: word.end,
            len: word.len,
        }
    }
}

fn close(chunks: &mut Vec<Chunk>, text: &str, open: Open) {
    chunks.push(Chunk::new(
        &text[open.start..open.end],
        open.start,
        open.end,
        chunks.len(),
    ));
}

fn words(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut gap = 0;
    let mut current: Option<(usize, usize)> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some((start, len)) = current.take() {
                words.push(Word {
                    start,
                    end: i,
                    len,
                    gap,
                });
                gap = 0;
            }
            gap += 1;
        } else {
            match current.as_mut() {
                Some((_, len)) => *len += 1,
                None => current = Some((i, 1)),
            }
        }
    }

    if let Some((start, len)) = current {
        words.push(Word {
            start,
            end: text.len(),
            len,
            gap,
        });
    }

    words
}
