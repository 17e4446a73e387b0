//! Hand construction helpers shared by the integration tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use cardtrick::{Card, Rank, Suit};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(cardtrick::Card::new(cardtrick::Rank::$rank, cardtrick::Suit::$suit)),*]
    };
}

// ============================================================================
// Hand Builders
// ============================================================================

pub struct HandBuilder {
    cards: Vec<Card>,
}

impl HandBuilder {
    pub fn new() -> Self {
        Self { cards: vec![] }
    }

    /// The hand used to explain the trick: only the clubs pair matches
    pub fn with_worked_example(self) -> Self {
        self.with_tokens(&["A_C", "4_C", "7_H", "2_S", "K_D"])
    }

    /// Two suits hold a pair each
    pub fn with_two_matching_suits(self) -> Self {
        self.with_tokens(&["3_C", "A_H", "5_C", "6_H", "9_S"])
    }

    /// Every card in one suit
    pub fn with_flush(self, suit: Suit) -> Self {
        let ranks = [Rank::Two, Rank::Five, Rank::Eight, Rank::Jack, Rank::King];
        Self {
            cards: ranks.iter().map(|rank| Card::new(*rank, suit)).collect(),
        }
    }

    pub fn with_tokens(self, tokens: &[&str]) -> Self {
        Self {
            cards: tokens
                .iter()
                .map(|token| Card::from_string(token).expect("test token should parse"))
                .collect(),
        }
    }

    pub fn build(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for HandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Every five-card hand, each in ascending deck order.
pub fn all_hands(mut visit: impl FnMut(&[Card])) {
    let deck = Card::all_cards();
    cardtrick::trick::verify::for_each_combination(deck.len(), 5, |indices| {
        let hand: Vec<Card> = indices.iter().map(|&i| deck[i]).collect();
        visit(&hand);
    });
}
