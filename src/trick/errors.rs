use thiserror::Error;

use super::cards::HandError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Invalid hand: {0}")]
    InvalidHand(#[from] HandError),

    #[error("Invalid arrangement: {0}")]
    InvalidArrangement(String),

    /// Only reachable if the pigeonhole guarantee for five cards fails.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),
}
