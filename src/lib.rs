// Five-card mind-reading trick: the assistant hides one card of a dealt hand
// and orders the other four so the magician can name it.

pub mod trick;

// Re-export commonly used types for easier access in tests
pub use trick::{
    decode, decode_tokens, encode, encode_tokens, encode_with_policy, Card, Encoding,
    EncodingValue, Hand, HandError, Rank, SelectionPolicy, Suit, TrickError, VerificationReport,
};
