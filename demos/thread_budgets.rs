//! Thread Budgets Comparison
//!
//! Shows how the same text splits under different budgets, and how the
//! segment count settles when the suffix grows from one digit to two.
//!
//! ```bash
//! cargo run --example thread_budgets
//! ```

use threadsplit::suffix::reserve;
use threadsplit::{normalize, Segmenter};

fn main() -> Result<(), threadsplit::Error> {
    println!("Thread Budgets");
    println!("==============\n");

    let document = r"Dr. Geoffrey Hinton pioneered backpropagation in the 1980s. His work at the University of Toronto, along with collaborators like Yann LeCun and Yoshua Bengio, laid the foundation for modern AI.

The training process involves three key steps: a forward pass, where input flows through the network and produces predictions; loss computation, where predictions are compared against ground truth; and backpropagation, where gradients flow backward and update the weights.

In 2024, the Nobel Prize recognized this line of work.";

    println!("Normalized length: {} chars\n", normalize(document).chars().count());

    for budget in [280, 140, 60, 30] {
        let segmenter = Segmenter::new(budget);
        let chunks = segmenter.chunks(document)?;
        let n = chunks.len();

        println!("Budget {budget}");
        println!("{}", "-".repeat(40));
        println!(
            "  {n} segments, reserve {} chars, content limit {}",
            reserve(n),
            budget - reserve(n)
        );

        for segment in segmenter.segment(document)?.iter().take(3) {
            println!("  {:>3} | {}", segment.rendered_len(), segment.to_string().replace('\n', "⏎"));
        }
        if n > 3 {
            println!("  ... {} more", n - 3);
        }
        println!();
    }

    Ok(())
}
