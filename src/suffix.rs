//! Positional suffixes: `" i/n"`.
//!
//! ## The Circular Constraint
//!
//! Every segment ends with its position, and the width of that suffix depends
//! on the total count:
//!
//! ```text
//! n = 9    " 9/9"      4 chars
//! n = 10   " 10/10"    6 chars
//! n = 100  " 100/100"  8 chars
//! ```
//!
//! But the total count depends on how much room is left for content, which
//! depends on the suffix width. The segmenter breaks the cycle by reserving a
//! uniform worst case, [`reserve`], for a candidate `n` and iterating until
//! `n` stops changing.
//!
//! The reserve uses `digit_count(n)` for the index part too. A segment `3/120`
//! actually needs 6 characters but is given 8; wasteful by two characters,
//! never overflowing.

/// Number of base-10 digits in `n`. Zero has one digit.
///
/// ```rust
/// use threadsplit::suffix::digit_count;
///
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(9), 1);
/// assert_eq!(digit_count(10), 2);
/// assert_eq!(digit_count(1_000), 4);
/// ```
#[must_use]
pub fn digit_count(n: usize) -> usize {
    let mut n = n / 10;
    let mut digits = 1;
    while n > 0 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Exact length of the suffix `" i/n"`.
#[must_use]
pub fn suffix_length(i: usize, n: usize) -> usize {
    1 + digit_count(i) + 1 + digit_count(n)
}

/// Worst-case suffix length for any segment of an `n`-segment thread.
///
/// Equal to `suffix_length(n, n)`, and never less than `suffix_length(i, n)`
/// for `i <= n`.
#[must_use]
pub fn reserve(n: usize) -> usize {
    let d = digit_count(n);
    1 + d + 1 + d
}

/// Render the suffix for segment `i` of `n`.
///
/// ```rust
/// use threadsplit::suffix::render_suffix;
///
/// assert_eq!(render_suffix(3, 12), " 3/12");
/// ```
#[must_use]
pub fn render_suffix(i: usize, n: usize) -> String {
    format!(" {i}/{n}")
}
