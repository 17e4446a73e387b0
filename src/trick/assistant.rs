use tracing::debug;

use super::cards::{Card, Hand};
use super::errors::TrickError;
use super::permutation;
use super::selector::{select_encoding, EncodingValue, SelectionPolicy};
use super::suit_match::find_matching_suits;

/// What the assistant hands over: the concealed card and the four cards to
/// lay down, `first_card` followed by `arrangement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Encoding {
    pub hidden_card: Card,
    pub first_card: Card,
    pub arrangement: [Card; 3],
    pub encoding_value: EncodingValue,
}

impl Encoding {
    pub fn revealed(&self) -> [Card; 4] {
        let [a, b, c] = self.arrangement;
        [self.first_card, a, b, c]
    }
}

pub fn encode(cards: &[Card]) -> Result<Encoding, TrickError> {
    encode_with_policy(cards, SelectionPolicy::default())
}

pub fn encode_with_policy(cards: &[Card], policy: SelectionPolicy) -> Result<Encoding, TrickError> {
    let hand = Hand::from_cards(cards)?;
    encode_hand(&hand, policy)
}

/// Any token that is not a real card makes the whole hand invalid.
pub fn encode_tokens(tokens: &[&str]) -> Result<Encoding, TrickError> {
    let hand = Hand::from_tokens(tokens)?;
    encode_hand(&hand, SelectionPolicy::default())
}

pub fn encode_hand(hand: &Hand, policy: SelectionPolicy) -> Result<Encoding, TrickError> {
    debug!(%hand, %policy, "dealt");

    let groups = find_matching_suits(hand)?;
    debug!(suits = groups.len(), "suit matched");

    let selection = select_encoding(&groups, policy)?;
    debug!(
        value = %selection.value,
        hidden = %selection.hidden.1,
        first = %selection.first.1,
        "value selected"
    );

    let remaining: [Card; 3] = hand
        .cards()
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != selection.hidden.0 && *position != selection.first.0)
        .map(|(_, card)| *card)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|rest: Vec<Card>| {
            TrickError::InternalInvariant(format!("{} cards left to arrange", rest.len()))
        })?;

    let arrangement = permutation::arrange(selection.value, remaining);
    let encoding = Encoding {
        hidden_card: selection.hidden.1,
        first_card: selection.first.1,
        arrangement,
        encoding_value: selection.value,
    };
    debug!(revealed = ?encoding.revealed(), "arranged");

    Ok(encoding)
}
