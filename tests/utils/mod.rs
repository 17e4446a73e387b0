pub mod assertions;
pub mod hand_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::EncodingAssertion;
#[allow(unused_imports)]
pub use hand_builders::{all_hands, HandBuilder};
