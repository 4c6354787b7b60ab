//! Checking alignments against each other.
//!
//! Different aligners, e.g. this one and a linear-space aligner, should agree on the optimal score for every pair of sequences. If they also break ties the
//! same way, they should agree on the aligned strings as well. The functions here re-score aligned strings and compare two sets of results row by row.

use crate::{AlignError, ScoreValue, ScoringScheme};

/// Scores two aligned sequences column by column.
///
/// If one sequence is shorter, it is padded on the right with gaps until both have the same length.
///
/// # Errors
///
/// - If any symbol is neither in the alphabet nor the gap.
/// - If the sum overflows `T`.
pub fn score_alignment<T: ScoreValue>(a: &[u8], b: &[u8], scoring: &ScoringScheme<T>) -> Result<T, AlignError> {
    let gap = scoring.gap();
    let width = a.len().max(b.len());
    let pad = |s: &[u8]| s.iter().copied().chain(core::iter::repeat(gap)).take(width).collect::<Vec<_>>();
    scoring.sum_columns(pad(a).into_iter().zip(pad(b)))
}

/// The outcome of comparing two sets of alignment results row by row.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[must_use]
pub struct Comparison {
    /// The number of rows compared.
    pub compared: usize,
    /// The 1-based indices of the rows that differ.
    pub mismatches: Vec<usize>,
}

impl Comparison {
    /// Whether every row agreed.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl core::fmt::Display for Comparison {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_consistent() {
            write!(f, "All {} rows match.", self.compared)
        } else {
            write!(
                f,
                "Mismatch found in {} of {} rows at indices {:?}.",
                self.mismatches.len(),
                self.compared,
                self.mismatches
            )
        }
    }
}

/// Compares two sets of aligned pairs verbatim.
///
/// # Errors
///
/// If the two sets have different numbers of rows.
pub fn compare_aligned<A, B>(first: &[(A, A)], second: &[(B, B)]) -> Result<Comparison, String>
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    compare_by(first, second, |(a1, a2), (b1, b2)| Ok(a1.as_ref() == b1.as_ref() && a2.as_ref() == b2.as_ref()))
}

/// Compares two sets of aligned pairs by their scores under `scoring`, as computed by [`score_alignment`].
///
/// # Errors
///
/// - If the two sets have different numbers of rows.
/// - If any aligned sequence has a symbol outside the alphabet.
pub fn compare_scores<A, B, T>(first: &[(A, A)], second: &[(B, B)], scoring: &ScoringScheme<T>) -> Result<Comparison, String>
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
    T: ScoreValue,
{
    compare_by(first, second, |(a1, a2), (b1, b2)| {
        let a = score_alignment(a1.as_ref(), a2.as_ref(), scoring).map_err(|e| e.to_string())?;
        let b = score_alignment(b1.as_ref(), b2.as_ref(), scoring).map_err(|e| e.to_string())?;
        Ok(a == b)
    })
}

/// Compares two sets of rows with `agree`, collecting the 1-based indices of the rows that do not agree.
fn compare_by<A, B, F>(first: &[A], second: &[B], agree: F) -> Result<Comparison, String>
where
    F: Fn(&A, &B) -> Result<bool, String>,
{
    if first.len() != second.len() {
        return Err(format!(
            "Cannot compare {} alignments against {} alignments.",
            first.len(),
            second.len()
        ));
    }

    let mut mismatches = Vec::new();
    for (i, (a, b)) in first.iter().zip(second).enumerate() {
        if !agree(a, b).map_err(|e| format!("Row {}: {e}", i + 1))? {
            mismatches.push(i + 1);
        }
    }

    Ok(Comparison {
        compared: first.len(),
        mismatches,
    })
}
