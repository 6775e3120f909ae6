//! Basic Thread
//!
//! The minimal example: split a long post into a numbered thread.
//!
//! ```bash
//! cargo run --example 01_basic_thread
//! ```

use threadsplit::{char_len, segment, DEFAULT_BUDGET};

fn main() -> Result<(), threadsplit::Error> {
    let document = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions on new, unseen examples. \
        This is fundamentally different from traditional programming, where humans \
        write explicit rules.\n\n\
        Deep learning extends this with multiple hidden layers. Each layer learns \
        increasingly abstract representations. Early layers detect edges; later \
        layers recognize objects. The deeper the network, the more abstract the \
        features it can represent, and the more data it needs to train well.";

    let thread = segment(document, DEFAULT_BUDGET)?;

    println!("Document: {} chars", char_len(document));
    println!("Posts: {}\n", thread.len());

    for post in &thread {
        println!("[{} chars]\n{post}\n", char_len(post));
    }

    Ok(())
}
