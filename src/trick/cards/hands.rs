use std::fmt;
use thiserror::Error;

use super::basic::Card;

/// Cards dealt to the assistant before one is concealed.
pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("expected 5 cards, got {0}")]
    WrongSize(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("unrecognized card: {0}")]
    UnrecognizedCard(String),
}

/// Five distinct cards in the order they were dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::WrongSize(cards.len()))?;

        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    pub fn from_tokens(tokens: &[&str]) -> Result<Self, HandError> {
        let cards = tokens
            .iter()
            .map(|token| {
                Card::from_string(token).map_err(|_| HandError::UnrecognizedCard(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cards(&cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "[{}]", tokens.join(", "))
    }
}
