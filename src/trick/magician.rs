use tracing::debug;

use super::cards::{Card, RANK_COUNT, SUIT_COUNT};
use super::errors::TrickError;
use super::permutation;
use super::selector::EncodingValue;

/// Name the concealed card from the four revealed cards.
///
/// `first_card` carries the suit; the order of `arrangement` carries the rank
/// offset.
pub fn decode(first_card: Card, arrangement: &[Card]) -> Result<Card, TrickError> {
    let triple: [Card; 3] = arrangement.try_into().map_err(|_| {
        TrickError::InvalidArrangement(format!(
            "expected 3 cards after the first card, got {}",
            arrangement.len()
        ))
    })?;

    if triple.contains(&first_card) {
        return Err(TrickError::InvalidArrangement(format!(
            "{first_card} is revealed twice"
        )));
    }

    let value = permutation::rank(triple).ok_or_else(|| {
        TrickError::InvalidArrangement(format!(
            "{} {} {} is not an ordering of three distinct cards",
            triple[0], triple[1], triple[2]
        ))
    })?;

    let hidden = reconstruct_hidden(first_card, value)?;
    if triple.contains(&hidden) {
        return Err(TrickError::InvalidArrangement(format!(
            "decoded {hidden} is already on the table"
        )));
    }

    debug!(first = %first_card, %value, %hidden, "decoded");
    Ok(hidden)
}

/// Malformed tokens are reported as invalid cards.
pub fn decode_tokens(first_card: &str, arrangement: &[&str]) -> Result<Card, TrickError> {
    let first_card = Card::from_string(first_card)?;
    let arrangement = arrangement
        .iter()
        .map(|token| Card::from_string(token))
        .collect::<Result<Vec<_>, _>>()?;

    decode(first_card, &arrangement)
}

/// `hidden = first + value (mod 13)`, in the first card's suit.
pub fn reconstruct_hidden(first_card: Card, value: EncodingValue) -> Result<Card, TrickError> {
    let hidden_rank = (first_card.rank_number() + value.get()) % RANK_COUNT;
    let hidden_index = hidden_rank as usize * SUIT_COUNT as usize + first_card.suit as usize;
    Card::from_index(hidden_index)
}
