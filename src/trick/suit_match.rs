use super::cards::{Card, Hand, Suit};
use super::errors::TrickError;

/// Cards of one suit, tagged with their position in the dealt hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroup {
    pub suit: Suit,
    pub members: Vec<(usize, Card)>,
}

/// Group the hand by suit, keeping only suits that hold at least two cards.
///
/// Groups come back in order of each suit's first appearance in the hand so
/// that pair selection scans them deterministically. With five cards and four
/// suits at least one group always survives.
pub fn find_matching_suits(hand: &Hand) -> Result<Vec<SuitGroup>, TrickError> {
    let mut groups: Vec<SuitGroup> = Vec::new();
    for (position, card) in hand.cards().iter().enumerate() {
        match groups.iter_mut().find(|group| group.suit == card.suit) {
            Some(group) => group.members.push((position, *card)),
            None => groups.push(SuitGroup {
                suit: card.suit,
                members: vec![(position, *card)],
            }),
        }
    }

    groups.retain(|group| group.members.len() >= 2);

    if groups.is_empty() {
        return Err(TrickError::InternalInvariant(format!(
            "no two cards share a suit in {hand}"
        )));
    }

    Ok(groups)
}
