//! Fixed-point thread segmentation.
//!
//! ## The Loop
//!
//! ```text
//! doc = normalize(text)
//! n   = 1
//! loop:
//!     max_len = budget - reserve(n)
//!     chunks  = pack(doc, max_len)
//!     if chunks.len() == n: done
//!     n = chunks.len()
//! ```
//!
//! ## Why It Terminates
//!
//! `reserve(n)` is a step function that only grows at 10, 100, 1000... A
//! larger reserve means less room per chunk, which can only mean as many or
//! more chunks. So `n` never decreases, and an iteration that does not change
//! the digit width of `n` leaves the reserve alone, which makes the next
//! iteration reproduce the same count. In practice the loop ends after one or
//! two passes:
//!
//! ```text
//! budget 30, 90 two-letter words
//!
//! iter 1: n = 1   reserve 4   max_len 26  -> 10 chunks (9 words each)
//! iter 2: n = 10  reserve 6   max_len 24  -> 12 chunks (8 words each)
//! iter 3: n = 12  reserve 6   max_len 24  -> 12 chunks  (stable)
//! ```
//!
//! The iteration cap turns a would-be infinite loop into
//! [`Error::NonConvergence`] instead of a hang or a silently truncated thread.

use crate::budget::{Budget, DEFAULT_BUDGET};
use crate::error::{Error, Result};
use crate::normalize::{char_len, normalize};
use crate::packer::{Packer, WordPacker};
use crate::suffix::reserve;
use crate::{Chunk, Segment};

/// Default cap on fixed-point iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Splits text into numbered segments that fit a [`Budget`].
///
/// Holds only configuration; one instance can be shared across threads.
///
/// ## Example
///
/// ```rust
/// use threadsplit::Segmenter;
///
/// let segmenter = Segmenter::new(20);
/// let segments = segmenter.segment("alpha beta gamma delta epsilon")?;
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].to_string(), "alpha beta gamma 1/2");
/// assert_eq!(segments[1].to_string(), "delta epsilon 2/2");
/// # Ok::<(), threadsplit::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    budget: Budget,
    max_iterations: usize,
}

impl Segmenter {
    /// Create a segmenter for the given budget.
    ///
    /// The budget is checked when segmenting, not here.
    #[must_use]
    pub fn new(budget: usize) -> Self {
        Self {
            budget: Budget::new(budget),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Set the fixed-point iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIterationCap`] if `max_iterations == 0`.
    pub fn with_max_iterations(self, max_iterations: usize) -> Result<Self> {
        if max_iterations == 0 {
            return Err(Error::InvalidIterationCap(max_iterations));
        }
        Ok(Self {
            max_iterations,
            ..self
        })
    }

    /// The configured budget.
    #[must_use]
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// The configured iteration cap.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Split `text` into segments.
    ///
    /// Empty or whitespace-only text yields an empty thread.
    ///
    /// # Errors
    ///
    /// - [`Error::BudgetTooSmall`] if the budget is below [`Budget::MIN`] or
    ///   the count needs a wider suffix than the budget allows. `minimum` is
    ///   the smallest larger budget that segments this text.
    /// - [`Error::NonConvergence`] if the count has not settled within the
    ///   iteration cap.
    pub fn segment(&self, text: &str) -> Result<Vec<Segment>> {
        let chunks = self.chunks(text)?;
        let total = chunks.len();

        Ok(chunks
            .into_iter()
            .map(|chunk| Segment::new(chunk.text, chunk.index + 1, total))
            .collect())
    }

    /// Split `text` and render every segment as `"{content} {i}/{n}"`.
    ///
    /// # Errors
    ///
    /// Same as [`Segmenter::segment`].
    pub fn segment_strings(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .segment(text)?
            .into_iter()
            .map(String::from)
            .collect())
    }

    /// Run the fixed-point loop and return the settled chunks of the
    /// normalized document.
    ///
    /// Chunk offsets refer to `normalize(text)`, not to `text`.
    ///
    /// # Errors
    ///
    /// Same as [`Segmenter::segment`].
    pub fn chunks(&self, text: &str) -> Result<Vec<Chunk>> {
        let checked = self.budget.validate();

        let doc = normalize(text);
        if doc.is_empty() {
            checked?;
            tracing::debug!("empty document, nothing to segment");
            return Ok(vec![]);
        }

        match checked.and_then(|budget| self.settle(&doc, budget)) {
            Err(Error::BudgetTooSmall { budget, .. }) => {
                let minimum = self.minimum_budget(&doc);
                tracing::debug!(budget, minimum, "budget too small for this text");
                Err(Error::BudgetTooSmall { budget, minimum })
            }
            settled => settled,
        }
    }

    /// The fixed-point loop over an already normalized, non-empty document.
    fn settle(&self, doc: &str, budget: Budget) -> Result<Vec<Chunk>> {
        let mut n = 1;
        for iteration in 1..=self.max_iterations {
            let max_len = budget.content_limit(n)?;
            let chunks = WordPacker::new(max_len).pack(doc);

            tracing::trace!(iteration, candidate = n, max_len, count = chunks.len(), "packed");

            if chunks.len() == n {
                tracing::debug!(
                    iterations = iteration,
                    segments = n,
                    budget = budget.get(),
                    "segment count converged"
                );
                return Ok(chunks);
            }
            n = chunks.len();
        }

        tracing::warn!(
            iterations = self.max_iterations,
            last_count = n,
            "segment count did not converge"
        );
        Err(Error::NonConvergence {
            iterations: self.max_iterations,
            last_count: n,
        })
    }

    /// Smallest budget above the configured one that segments `doc`.
    ///
    /// A budget of `char_len(doc) + reserve(1)` holds the whole document in
    /// one segment on the first pass, so the search is bounded by it.
    fn minimum_budget(&self, doc: &str) -> usize {
        let ceiling = char_len(doc) + reserve(1);
        let floor = (self.budget.get() + 1).max(Budget::MIN);

        (floor..ceiling)
            .find(|&candidate| self.settle(doc, Budget::new(candidate)).is_ok())
            .unwrap_or(ceiling)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_segment() {
        let segments = Segmenter::default().segment("Hello, world!").unwrap();
        assert_eq!(segments, [Segment::new("Hello, world!", 1, 1)]);
    }

    #[test]
    fn test_empty_text() {
        assert!(Segmenter::default().segment("").unwrap().is_empty());
        assert!(Segmenter::default().segment(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_budget_too_small() {
        assert_eq!(
            Segmenter::new(4).segment("anything"),
            Err(Error::BudgetTooSmall { budget: 4, minimum: 5 })
        );
        // checked even when there is nothing to segment
        assert!(Segmenter::new(0).segment("").is_err());
    }

    #[test]
    fn test_minimum_budget_works() {
        let segments = Segmenter::new(5).segment("a b c").unwrap();
        let rendered: Vec<String> = segments.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["a 1/3", "b 2/3", "c 3/3"]);
    }

    #[test]
    fn test_minimum_budget_overflows_at_ten() {
        // Ten one-letter words need " 10/10", which leaves no room in 6 chars.
        let text = "a b c d e f g h i j";
        assert_eq!(
            Segmenter::new(6).segment(text),
            Err(Error::BudgetTooSmall { budget: 6, minimum: 7 })
        );
    }

    #[test]
    fn test_reported_minimum_is_smallest_working_budget() {
        // 60 two-letter words. At 7, n = 60 leaves 1 char per segment, the
        // words split into 120 pieces, and " 120/120" does not fit. At 8,
        // n = 60 leaves 2 chars: one word per segment, stable.
        let text = vec!["ab"; 60].join(" ");

        for budget in [6, 7] {
            assert_eq!(
                Segmenter::new(budget).segment(&text),
                Err(Error::BudgetTooSmall { budget, minimum: 8 })
            );
        }
        assert_eq!(Segmenter::new(8).segment(&text).unwrap().len(), 60);
    }

    #[test]
    fn test_minimum_for_budget_below_floor() {
        // 20 letters. At 5: 20 one-char pieces, " 20/20" leaves nothing.
        // At 6: 10 pieces of 2, " 10/10" leaves nothing. At 7: 7 pieces of 3.
        let text = "abcdefghijklmnopqrst";
        assert_eq!(
            Segmenter::new(2).segment(text),
            Err(Error::BudgetTooSmall { budget: 2, minimum: 7 })
        );
        assert!(Segmenter::new(6).segment(text).is_err());
        assert_eq!(Segmenter::new(7).segment(text).unwrap().len(), 7);
        // nothing to segment: only the fixed floor applies
        assert_eq!(
            Segmenter::new(2).segment(""),
            Err(Error::BudgetTooSmall { budget: 2, minimum: 5 })
        );
    }

    #[test]
    fn test_crossing_nine_to_ten() {
        // 10 chars per word; budget 16 leaves 12 for n < 10 and 10 for n >= 10,
        // so each word is its own segment either way and " 10/10" still fits.
        let word = "abcdefghij";
        let text = vec![word; 10].join(" ");
        let segments = Segmenter::new(16).segment(&text).unwrap();

        assert_eq!(segments.len(), 10);
        for segment in &segments {
            assert!(segment.rendered_len() <= 16, "{segment} too long");
        }
    }

    #[test]
    fn test_reserve_widening_adds_segments() {
        let text = vec!["ab"; 90].join(" ");
        let segments = Segmenter::new(30).segment(&text).unwrap();

        assert_eq!(segments.len(), 12);
        assert!(segments.iter().all(|s| s.rendered_len() <= 30));
    }

    #[test]
    fn test_converged_count_uses_its_own_reserve() {
        let text = "word ".repeat(95);
        let segmenter = Segmenter::new(30);
        let chunks = segmenter.chunks(&text).unwrap();
        let limit = 30 - reserve(chunks.len());
        assert!(chunks.iter().all(|c| c.len() <= limit));
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        // One pass can never confirm a count above 1.
        let segmenter = Segmenter::new(10).with_max_iterations(1).unwrap();
        let result = segmenter.segment("alpha beta gamma delta");
        assert!(matches!(
            result,
            Err(Error::NonConvergence { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_zero_iteration_cap_rejected() {
        assert_eq!(
            Segmenter::default().with_max_iterations(0),
            Err(Error::InvalidIterationCap(0))
        );
    }

    #[test]
    fn test_segment_strings() {
        let rendered = Segmenter::new(20)
            .segment_strings("alpha beta gamma delta epsilon")
            .unwrap();
        assert_eq!(rendered, ["alpha beta gamma 1/2", "delta epsilon 2/2"]);
    }
}
