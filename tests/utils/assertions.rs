//! Assertion helpers - fluent API for checking an encoded trick
#![allow(dead_code)] // Test utilities may not all be used in every test

use cardtrick::{decode, Card, Encoding};

pub struct EncodingAssertion {
    dealt: Vec<Card>,
    encoding: Encoding,
}

impl EncodingAssertion {
    pub fn new(dealt: &[Card], encoding: Encoding) -> Self {
        Self {
            dealt: dealt.to_vec(),
            encoding,
        }
    }

    /// The hidden card and the four revealed cards are exactly the dealt hand
    pub fn uses_every_dealt_card(self) -> Self {
        let mut shown: Vec<Card> = self.encoding.revealed().to_vec();
        shown.push(self.encoding.hidden_card);
        shown.sort();

        let mut dealt = self.dealt.clone();
        dealt.sort();
        assert_eq!(shown, dealt, "encoding should partition the dealt hand");
        self
    }

    pub fn first_card_shares_hidden_suit(self) -> Self {
        assert_eq!(
            self.encoding.first_card.suit, self.encoding.hidden_card.suit,
            "first card {} should share the suit of {}",
            self.encoding.first_card, self.encoding.hidden_card
        );
        self
    }

    pub fn value_in_range(self) -> Self {
        let value = self.encoding.encoding_value.get();
        assert!((1..=6).contains(&value), "value {} out of range", value);
        self
    }

    pub fn decodes_to_hidden_card(self) -> Self {
        let decoded = decode(self.encoding.first_card, &self.encoding.arrangement)
            .expect("a fresh encoding should decode");
        assert_eq!(decoded, self.encoding.hidden_card);
        self
    }

    pub fn hides(self, token: &str) -> Self {
        assert_eq!(self.encoding.hidden_card.to_string(), token);
        self
    }

    pub fn reveals(self, tokens: [&str; 4]) -> Self {
        let revealed: Vec<String> = self
            .encoding
            .revealed()
            .iter()
            .map(Card::to_string)
            .collect();
        assert_eq!(revealed, tokens);
        self
    }
}
