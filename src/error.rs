//! Error types for threadsplit.

/// Errors that can occur while segmenting a thread.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The budget cannot hold the text with a suffix wide enough for its count.
    #[error("budget {budget} is too small (minimum is {minimum})")]
    BudgetTooSmall {
        /// The budget that was rejected.
        budget: usize,
        /// The smallest larger budget that segments the same text, or
        /// [`Budget::MIN`](crate::Budget::MIN) when there is no text.
        minimum: usize,
    },

    /// The fixed-point loop hit its iteration cap without settling.
    ///
    /// This indicates a logic defect, not bad input.
    #[error("segment count did not converge after {iterations} iterations (last count {last_count})")]
    NonConvergence {
        /// Iterations performed.
        iterations: usize,
        /// Chunk count produced by the final iteration.
        last_count: usize,
    },

    /// Iteration cap must be > 0.
    #[error("invalid iteration cap: {0} (must be > 0)")]
    InvalidIterationCap(usize),
}

/// Result type for threadsplit operations.
pub type Result<T> = std::result::Result<T, Error>;
