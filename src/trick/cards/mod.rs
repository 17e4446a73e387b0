pub mod basic;
pub mod hands;


pub use basic::{Card, Rank, Suit, DECK_SIZE, RANK_COUNT, SUIT_COUNT};
pub use hands::{Hand, HandError, HAND_SIZE};
