//! Segment length budget.
//!
//! A budget is the hard ceiling on a finished segment: content plus suffix,
//! counted in code points. Platforms publish it as their post length limit
//! (280 for the classic case).
//!
//! ```text
//! budget = 20, n = 2
//!
//! "alpha beta gamma 1/2"
//!  └──── content ───┘└┬┘
//!        16 chars     reserve(2) = 4
//! ```
//!
//! The smallest usable budget is [`Budget::MIN`]: one content character plus
//! the 4-character suffix `" 1/1"`.

use crate::error::{Error, Result};
use crate::suffix::reserve;

/// Default budget, in code points.
pub const DEFAULT_BUDGET: usize = 280;

/// Maximum length of a finished segment, in code points.
///
/// # Examples
///
/// ```rust
/// use threadsplit::Budget;
///
/// let budget = Budget::default();
/// assert_eq!(budget.get(), 280);
///
/// // Room for content when the thread has 12 segments: 280 - " 12/12".len()
/// assert_eq!(budget.content_limit(12).unwrap(), 274);
///
/// assert!(Budget::new(4).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Budget(usize);

impl Budget {
    /// Smallest budget that can hold a one-segment thread.
    pub const MIN: usize = 5;

    /// Create a budget. Validation happens in [`Budget::validate`].
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    /// The limit in code points.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Check that at least a single segment fits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BudgetTooSmall`] if the limit is below [`Budget::MIN`].
    pub fn validate(self) -> Result<Self> {
        if self.0 < Self::MIN {
            Err(Error::BudgetTooSmall {
                budget: self.0,
                minimum: Self::MIN,
            })
        } else {
            Ok(self)
        }
    }

    /// Room left for content in a thread of `n` segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BudgetTooSmall`] if the reserve for `n` leaves no room.
    /// `minimum` is then only the bound for this `n`; a larger count may
    /// need more.
    pub fn content_limit(&self, n: usize) -> Result<usize> {
        let reserved = reserve(n);
        match self.0.checked_sub(reserved) {
            Some(limit) if limit > 0 => Ok(limit),
            _ => Err(Error::BudgetTooSmall {
                budget: self.0,
                minimum: reserved + 1,
            }),
        }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

impl From<usize> for Budget {
    fn from(limit: usize) -> Self {
        Self::new(limit)
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
