//! # threadsplit
//!
//! Split text into numbered, length-bounded segments for posting as a thread.
//!
//! ## The Problem
//!
//! Social platforms cap the length of a post. Long text has to go out as a
//! thread, and readers expect each post to say where it sits: `" 3/7"`.
//!
//! This sounds trivial: split every N characters, append the number. But the
//! number itself takes room, and how much depends on how many posts there are:
//!
//! ```text
//! 9 posts     " 9/9"       4 chars
//! 10 posts    " 10/10"     6 chars
//! 100 posts   " 100/100"   8 chars
//! ```
//!
//! The count depends on the suffix width, and the suffix width depends on the
//! count. Ignore that and the ninth-to-tenth transition silently pushes posts
//! over the limit.
//!
//! ## The Pipeline
//!
//! ```text
//! raw text
//!    │ normalize: collapse whitespace, keep paragraph breaks, trim
//!    ▼
//! document
//!    │ n = 1
//!    │ ┌──────────────────────────────────────────────┐
//!    │ │ max_len = budget - reserve(n)                │
//!    │ │ chunks  = greedy word packing under max_len  │
//!    │ │ n       = chunks.len()     until n is stable │
//!    │ └──────────────────────────────────────────────┘
//!    ▼
//! segments: "{chunk} {i}/{n}"
//! ```
//!
//! - [`normalize()`]: whitespace clean-up.
//! - [`suffix`]: digit counts and the worst-case suffix reserve.
//! - [`WordPacker`]: greedy packing at word boundaries, with [`CharSplitter`]
//!   as the fallback for words longer than a whole segment.
//! - [`Segmenter`]: the bounded fixed-point loop.
//!
//! ## Length Unit
//!
//! Lengths are Unicode code points everywhere: normalization, packing, and the
//! final check. Not bytes, not grapheme clusters. Multi-code-point emoji
//! therefore cost more than one unit each.
//!
//! ## Quick Start
//!
//! ```rust
//! let thread = threadsplit::segment("alpha beta gamma delta epsilon", 20)?;
//!
//! assert_eq!(thread, ["alpha beta gamma 1/2", "delta epsilon 2/2"]);
//! # Ok::<(), threadsplit::Error>(())
//! ```
//!
//! For structured output or a custom iteration cap, use [`Segmenter`]:
//!
//! ```rust
//! use threadsplit::Segmenter;
//!
//! let segmenter = Segmenter::new(280).with_max_iterations(5)?;
//! let text = "word ".repeat(200);
//!
//! for segment in segmenter.segment(&text)? {
//!     assert!(segment.rendered_len() <= 280);
//!     println!("{segment}");
//! }
//! # Ok::<(), threadsplit::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! | Property | |
//! |----------|-|
//! | Every segment ≤ budget | in code points, suffix included |
//! | No word lost, duplicated, reordered | except a hard-split word, whose pieces are in order |
//! | Suffixes | exactly `" 1/n"` .. `" n/n"`, `n` = segment count |
//! | Empty input | empty thread, not an error |
//! | Pure | no I/O, no shared state, safe to call from many threads |

mod budget;
mod chunk;
mod error;
pub mod normalize;
mod packer;
mod segment;
mod segmenter;
pub mod suffix;

pub use budget::{Budget, DEFAULT_BUDGET};
pub use chunk::Chunk;
pub use error::{Error, Result};
pub use normalize::{char_len, normalize, PARAGRAPH_BREAK};
pub use packer::{pack, CharSplitter, Packer, WordPacker};
pub use segment::Segment;
pub use segmenter::{Segmenter, DEFAULT_MAX_ITERATIONS};

/// Split `text` into rendered segments of at most `budget` code points.
///
/// Each string is the segment content followed by `" i/n"`. Equivalent to
/// `Segmenter::new(budget).segment_strings(text)`.
///
/// ```rust
/// let thread = threadsplit::segment("short enough", threadsplit::DEFAULT_BUDGET)?;
/// assert_eq!(thread, ["short enough 1/1"]);
///
/// assert!(threadsplit::segment("", 280)?.is_empty());
/// assert!(threadsplit::segment("text", 3).is_err());
/// # Ok::<(), threadsplit::Error>(())
/// ```
///
/// # Errors
///
/// - [`Error::BudgetTooSmall`] if `budget` is too small for this text.
/// - [`Error::NonConvergence`] if the segment count never settles.
pub fn segment(text: &str, budget: usize) -> Result<Vec<String>> {
    Segmenter::new(budget).segment_strings(text)
}
