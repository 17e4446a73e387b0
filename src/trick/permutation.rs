//! The ordering code shared by both sides of the trick.
//!
//! Three distinct cards sorted ascending form the reference triple `(x, y, z)`.
//! Row `v - 1` of [`ORDERINGS`] lists which reference positions are laid down
//! for encoding value `v`. Encoding reads the table forwards and decoding
//! searches it, so the two directions cannot drift apart.

use super::selector::EncodingValue;

pub const ORDERINGS: [[usize; 3]; 6] = [
    [0, 1, 2], // 1 -> x y z
    [0, 2, 1], // 2 -> x z y
    [1, 0, 2], // 3 -> y x z
    [1, 2, 0], // 4 -> y z x
    [2, 0, 1], // 5 -> z x y
    [2, 1, 0], // 6 -> z y x
];

fn reference<T: Ord + Copy>(triple: [T; 3]) -> [T; 3] {
    let mut sorted = triple;
    sorted.sort();
    sorted
}

fn apply<T: Copy>(row: &[usize; 3], sorted: &[T; 3]) -> [T; 3] {
    [sorted[row[0]], sorted[row[1]], sorted[row[2]]]
}

/// Lay out `triple` in the order that carries `value`.
pub fn arrange<T: Ord + Copy>(value: EncodingValue, triple: [T; 3]) -> [T; 3] {
    let row = &ORDERINGS[usize::from(value.get() - EncodingValue::MIN)];
    apply(row, &reference(triple))
}

/// Recover the value carried by an observed ordering.
///
/// Returns `None` when the elements are not pairwise distinct, since the
/// ordering is then ambiguous.
pub fn rank<T: Ord + Copy>(observed: [T; 3]) -> Option<EncodingValue> {
    let sorted = reference(observed);
    if sorted[0] == sorted[1] || sorted[1] == sorted[2] {
        return None;
    }

    EncodingValue::all()
        .zip(ORDERINGS.iter())
        .find(|(_, row)| apply(row, &sorted) == observed)
        .map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trick::cards::Card;
    use rstest::rstest;
    use std::collections::HashSet;

    fn value(v: u8) -> EncodingValue {
        EncodingValue::new(v).unwrap()
    }

    #[rstest]
    #[case(1, [10, 20, 30])]
    #[case(2, [10, 30, 20])]
    #[case(3, [20, 10, 30])]
    #[case(4, [20, 30, 10])]
    #[case(5, [30, 10, 20])]
    #[case(6, [30, 20, 10])]
    fn arrange_follows_table(#[case] v: u8, #[case] expected: [u32; 3]) {
        // Input order must not matter
        assert_eq!(arrange(value(v), [30u32, 10, 20]), expected);
        assert_eq!(arrange(value(v), [10u32, 20, 30]), expected);
        assert_eq!(rank(expected), Some(value(v)));
    }

    #[test]
    fn orderings_are_distinct_permutations() {
        let rows: HashSet<[usize; 3]> = ORDERINGS.iter().copied().collect();
        assert_eq!(rows.len(), 6);
        for row in ORDERINGS {
            let mut sorted = row;
            sorted.sort();
            assert_eq!(sorted, [0, 1, 2]);
        }
    }

    #[test]
    fn rank_inverts_arrange_for_card_triples() {
        let deck = Card::all_cards();
        for window in deck.windows(3).step_by(5) {
            let triple = [window[2], window[0], window[1]];
            let mut seen = HashSet::new();
            for v in EncodingValue::all() {
                let laid_out = arrange(v, triple);
                assert!(seen.insert(laid_out));
                assert_eq!(rank(laid_out), Some(v));
            }
        }
    }

    #[test]
    fn rank_rejects_repeated_elements() {
        assert_eq!(rank([4, 4, 9]), None);
        assert_eq!(rank([9, 4, 9]), None);
        assert_eq!(rank([1, 1, 1]), None);
    }
}
