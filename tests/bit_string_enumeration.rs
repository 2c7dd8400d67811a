use combinadic::bit_string::{rank_bit_string, total_bit_strings, unrank_bit_string};
use insta::assert_snapshot;
use itertools::Itertools;
use num_bigint::BigUint;
use std::collections::HashSet;

fn enumerate(length: usize, num_ones: usize) -> Vec<Vec<u8>> {
    let total = total_bit_strings(length, num_ones);
    let mut strings = Vec::new();
    let mut rank = BigUint::from(0u32);
    while rank < total {
        strings.push(unrank_bit_string(length, num_ones, &rank).unwrap());
        rank += 1u32;
    }
    strings
}

/// In the canonical order, a 1 in the highest differing position wins.
fn comes_before(a: &[u8], b: &[u8]) -> bool {
    for pos in (0..a.len()).rev() {
        if a[pos] != b[pos] {
            return a[pos] == 1;
        }
    }
    false
}

#[test]
fn enumeration_covers_every_string_exactly_once() {
    let strings = enumerate(6, 3);
    assert_eq!(strings.len(), 20);

    let distinct: HashSet<_> = strings.iter().cloned().collect();
    assert_eq!(distinct.len(), strings.len());

    let expected: HashSet<Vec<u8>> = (0..6)
        .combinations(3)
        .map(|ones| {
            let mut bits = vec![0u8; 6];
            for pos in ones {
                bits[pos] = 1;
            }
            bits
        })
        .collect();
    assert_eq!(distinct, expected);
}

#[test]
fn enumeration_is_in_canonical_order() {
    let strings = enumerate(6, 3);
    for pair in strings.windows(2) {
        assert!(comes_before(&pair[0], &pair[1]));
    }
}

#[test]
fn ranks_round_trip_through_unranking() {
    for (rank, bits) in enumerate(7, 3).iter().enumerate() {
        assert_eq!(rank_bit_string(bits), BigUint::from(rank));
    }
}

#[test]
fn enumerates_five_choose_two() {
    let rendered = enumerate(5, 2)
        .iter()
        .map(|bits| bits.iter().join(""))
        .join("\n");
    assert_snapshot!(rendered, @r"
    00011
    00101
    01001
    10001
    00110
    01010
    10010
    01100
    10100
    11000
    ");
}
