// Public API
pub use assistant::{encode, encode_hand, encode_tokens, encode_with_policy, Encoding};
pub use cards::{Card, Hand, HandError, Rank, Suit};
pub use errors::TrickError;
pub use magician::{decode, decode_tokens, reconstruct_hidden};
pub use selector::{EncodingValue, SelectionPolicy};
pub use verify::VerificationReport;

pub mod cards;
pub mod permutation;
pub mod selector;
pub mod suit_match;
pub mod verify;

// Internal modules
mod assistant;
mod errors;
mod magician;
