use tracing::{error, info};

use super::assistant::encode_hand;
use super::cards::{Card, Hand, DECK_SIZE, HAND_SIZE};
use super::errors::TrickError;
use super::magician::decode;
use super::selector::{EncodingValue, SelectionPolicy};
use super::suit_match::find_matching_suits;

/// Outcome of running the trick on every five-card hand in the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct VerificationReport {
    pub hands_checked: u64,
    /// How often each encoding value was chosen, indexed by `value - 1`.
    pub value_counts: [u64; 6],
    pub round_trip_failures: u64,
}

impl VerificationReport {
    pub fn is_success(&self) -> bool {
        self.round_trip_failures == 0
    }
}

/// Visit every `k`-subset of `0..n` in lexicographic order.
pub fn for_each_combination(n: usize, k: usize, mut visit: impl FnMut(&[usize])) {
    if k > n {
        return;
    }

    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        visit(&indices);

        // Rightmost position that can still move up
        let Some(i) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            return;
        };
        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// Encode and decode all C(52, 5) hands.
///
/// A hand without a shared suit aborts with `InternalInvariant`; a hand whose
/// hidden card does not come back is counted in `round_trip_failures`.
pub fn exhaustive(policy: SelectionPolicy) -> Result<VerificationReport, TrickError> {
    let deck = Card::all_cards();
    let mut report = VerificationReport::default();
    let mut outcome: Result<(), TrickError> = Ok(());

    for_each_combination(DECK_SIZE, HAND_SIZE, |indices| {
        if outcome.is_err() {
            return;
        }
        let cards: Vec<Card> = indices.iter().map(|&i| deck[i]).collect();
        outcome = check_hand(&cards, policy, &mut report);
    });
    outcome?;

    info!(
        hands = report.hands_checked,
        failures = report.round_trip_failures,
        "exhaustive verification finished"
    );
    Ok(report)
}

fn check_hand(
    cards: &[Card],
    policy: SelectionPolicy,
    report: &mut VerificationReport,
) -> Result<(), TrickError> {
    let hand = Hand::from_cards(cards)?;
    find_matching_suits(&hand)?;

    let encoding = encode_hand(&hand, policy)?;
    let value = encoding.encoding_value.get();
    report.value_counts[usize::from(value - EncodingValue::MIN)] += 1;
    report.hands_checked += 1;

    match decode(encoding.first_card, &encoding.arrangement) {
        Ok(hidden) if hidden == encoding.hidden_card => {}
        outcome => {
            error!(%hand, expected = %encoding.hidden_card, ?outcome, "round trip failed");
            report.round_trip_failures += 1;
        }
    }
    Ok(())
}
