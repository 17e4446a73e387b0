use std::fmt;
use strum_macros::{Display, EnumString};
use tracing::warn;

use super::cards::{Card, RANK_COUNT};
use super::errors::TrickError;
use super::suit_match::SuitGroup;

/// Rank offset from the first card to the hidden card, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct EncodingValue(u8);

impl EncodingValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = EncodingValue> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for EncodingValue {
    type Error = TrickError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            TrickError::InternalInvariant(format!("encoding value {value} outside 1..=6"))
        })
    }
}

impl fmt::Display for EncodingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the assistant chooses among several usable same-suit pairs.
///
/// Either choice decodes correctly: the magician only needs the first card's
/// suit and the encoding value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Largest encoding value wins; ties keep the pair found first.
    #[default]
    MaxValue,
    /// First usable pair in scan order.
    FirstFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub value: EncodingValue,
    pub hidden: (usize, Card),
    pub first: (usize, Card),
}

/// `(minuend.rank - subtrahend.rank) mod 13`.
pub fn rank_offset(minuend: &Card, subtrahend: &Card) -> u8 {
    (minuend.rank_number() + RANK_COUNT - subtrahend.rank_number()) % RANK_COUNT
}

/// Orient a same-suit pair so that `hidden - first` lands in `1..=6`.
///
/// Returns `(value, hidden, first)`.
fn orient_pair(a: (usize, Card), b: (usize, Card)) -> (EncodingValue, (usize, Card), (usize, Card)) {
    if let Some(value) = EncodingValue::new(rank_offset(&a.1, &b.1)) {
        return (value, a, b);
    }
    if let Some(value) = EncodingValue::new(rank_offset(&b.1, &a.1)) {
        return (value, b, a);
    }

    // Equal ranks cannot occur for two distinct cards of one suit.
    warn!(first = %a.1, second = %b.1, "same-suit pair shares a rank, using offset 6");
    (EncodingValue(EncodingValue::MAX), a, b)
}

/// Pick the hidden card, the first card and the value linking them.
pub fn select_encoding(
    groups: &[SuitGroup],
    policy: SelectionPolicy,
) -> Result<Selection, TrickError> {
    let mut best: Option<Selection> = None;

    for group in groups {
        for (i, a) in group.members.iter().enumerate() {
            for b in &group.members[i + 1..] {
                let (value, hidden, first) = orient_pair(*a, *b);
                let candidate = Selection {
                    value,
                    hidden,
                    first,
                };

                match policy {
                    SelectionPolicy::FirstFound => return Ok(candidate),
                    SelectionPolicy::MaxValue => {
                        if best.map_or(true, |current| candidate.value > current.value) {
                            best = Some(candidate);
                        }
                    }
                }
            }
        }
    }

    best.ok_or_else(|| TrickError::InternalInvariant("no same-suit pair to encode".to_string()))
}
