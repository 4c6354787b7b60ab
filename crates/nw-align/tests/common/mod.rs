//! Helpers shared by the integration tests.

#![allow(dead_code)]

use nw_align::{ScoreValue, ScoringScheme};
use rand::prelude::*;

/// Generates `count` random sequences over `alphabet` with lengths in `min_len..=max_len`.
pub fn random_sequences(alphabet: &[u8], count: usize, min_len: usize, max_len: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(min_len..=max_len);
            (0..len).map(|_| alphabet[rng.random_range(0..alphabet.len())]).collect()
        })
        .collect()
}

/// Pairs up consecutive random sequences.
pub fn random_pairs(alphabet: &[u8], count: usize, min_len: usize, max_len: usize, seed: u64) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut sequences = random_sequences(alphabet, 2 * count, min_len, max_len, seed).into_iter();
    let mut pairs = Vec::with_capacity(count);
    while let (Some(v), Some(w)) = (sequences.next(), sequences.next()) {
        pairs.push((v, w));
    }
    pairs
}

/// A symmetric DNA scheme that penalizes transversions more than transitions.
pub fn transition_transversion() -> ScoringScheme<i32> {
    let purine = |b: u8| matches!(b, b'A' | b'G');
    ScoringScheme::from_fn(b"ACGT", b'-', |a, b| match (a, b) {
        (b'-', b'-') => 0,
        (b'-', _) | (_, b'-') => -3,
        _ if a == b => 2,
        _ if purine(a) == purine(b) => -1,
        _ => -2,
    })
    .unwrap_or_else(|e| unreachable!("The DNA alphabet is valid: {e}"))
}

/// The optimal global alignment score by exhaustive recursion over all alignments. Only usable for very short sequences.
pub fn brute_force_score<T: ScoreValue>(v: &[u8], w: &[u8], scoring: &ScoringScheme<T>) -> T {
    let gap = scoring.gap();
    let score = |a: u8, b: u8| scoring.score(a, b).unwrap_or_else(|e| unreachable!("Symbols were drawn from the alphabet: {e}"));

    match (v.split_last(), w.split_last()) {
        (None, None) => T::zero(),
        (Some((&a, v_rest)), None) => brute_force_score(v_rest, w, scoring) + score(a, gap),
        (None, Some((&b, w_rest))) => brute_force_score(v, w_rest, scoring) + score(gap, b),
        (Some((&a, v_rest)), Some((&b, w_rest))) => {
            let left = brute_force_score(v, w_rest, scoring) + score(gap, b);
            let up = brute_force_score(v_rest, w, scoring) + score(a, gap);
            let diagonal = brute_force_score(v_rest, w_rest, scoring) + score(a, b);
            left.max(up).max(diagonal)
        }
    }
}
