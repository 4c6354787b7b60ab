//! The products of an alignment: the DP matrix, its traceback directions, and the aligned pair of sequences.

use crate::{AlignError, ScoreValue, ScoringScheme};

mod direction;
mod matrix;

pub use direction::Direction;
pub use matrix::AlignmentMatrix;

/// Two sequences aligned to each other, with the score of their alignment.
///
/// Both aligned sequences have the same length, and each position (column) holds either a symbol from each sequence or a symbol from one sequence against
/// the gap. No column holds two gaps.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[must_use]
pub struct AlignedPair<T: ScoreValue> {
    /// The first sequence with gaps inserted.
    aligned_v: Vec<u8>,
    /// The second sequence with gaps inserted.
    aligned_w: Vec<u8>,
    /// The gap symbol used in the aligned sequences.
    gap: u8,
    /// The score of the alignment.
    score: T,
}

impl<T: ScoreValue> AlignedPair<T> {
    /// Creates an aligned pair.
    ///
    /// # Errors
    ///
    /// If the aligned sequences have different lengths.
    pub fn new(aligned_v: Vec<u8>, aligned_w: Vec<u8>, gap: u8, score: T) -> Result<Self, AlignError> {
        if aligned_v.len() == aligned_w.len() {
            Ok(Self {
                aligned_v,
                aligned_w,
                gap,
                score,
            })
        } else {
            Err(AlignError::Invariant(format!(
                "aligned sequences must have equal lengths, got {} and {}",
                aligned_v.len(),
                aligned_w.len()
            )))
        }
    }

    /// The first sequence with gaps inserted.
    #[must_use]
    pub fn aligned_v(&self) -> &[u8] {
        &self.aligned_v
    }

    /// The second sequence with gaps inserted.
    #[must_use]
    pub fn aligned_w(&self) -> &[u8] {
        &self.aligned_w
    }

    /// The gap symbol.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// The score of the alignment.
    pub const fn score(&self) -> T {
        self.score
    }

    /// The number of columns in the alignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aligned_v.len()
    }

    /// Whether the alignment has no columns, i.e. both sequences were empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aligned_v.is_empty()
    }

    /// The number of gaps in the first and second aligned sequences.
    #[must_use]
    pub fn gap_count(&self) -> [usize; 2] {
        [bytecount::count(&self.aligned_v, self.gap), bytecount::count(&self.aligned_w, self.gap)]
    }

    /// The number of columns in which both sequences have the same symbol.
    #[must_use]
    pub fn matches(&self) -> usize {
        self.columns().filter(|&(a, b)| a == b && a != self.gap).count()
    }

    /// Iterates over the columns of the alignment.
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned_v.iter().copied().zip(self.aligned_w.iter().copied())
    }

    /// Recomputes the score of the alignment column by column under the given scheme.
    ///
    /// For an alignment produced by an [`Aligner`](crate::Aligner) with the same scheme, this equals [`Self::score`].
    ///
    /// # Errors
    ///
    /// - If any symbol in the alignment is neither in the alphabet nor the gap.
    /// - If the sum overflows `T`.
    pub fn rescore(&self, scoring: &ScoringScheme<T>) -> Result<T, AlignError> {
        scoring.sum_columns(self.columns())
    }

    /// Returns both aligned sequences with their gaps removed.
    #[must_use]
    pub fn without_gaps(&self) -> [Vec<u8>; 2] {
        let strip = |s: &[u8]| s.iter().copied().filter(|&b| b != self.gap).collect::<Vec<_>>();
        [strip(&self.aligned_v), strip(&self.aligned_w)]
    }

    /// Consumes the pair and returns the two aligned sequences and the score.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>, T) {
        (self.aligned_v, self.aligned_w, self.score)
    }
}

/// Renders the two aligned sequences on separate lines.
impl<T: ScoreValue> core::fmt::Display for AlignedPair<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.aligned_v))?;
        write!(f, "{}", String::from_utf8_lossy(&self.aligned_w))
    }
}

#[cfg(test)]
mod tests {
    use super::AlignedPair;
    use crate::{AlignError, ScoringScheme};

    #[test]
    fn accessors() -> Result<(), AlignError> {
        let pair = AlignedPair::new(b"AC-GT".to_vec(), b"A-TGT".to_vec(), b'-', -1_i32)?;
        assert_eq!(pair.len(), 5);
        assert!(!pair.is_empty());
        assert_eq!(pair.gap_count(), [1, 1]);
        assert_eq!(pair.matches(), 3);
        assert_eq!(pair.without_gaps(), [b"ACGT".to_vec(), b"ATGT".to_vec()]);
        assert_eq!(pair.to_string(), "AC-GT\nA-TGT");

        let scoring = ScoringScheme::<i32>::unit_dna();
        assert_eq!(pair.rescore(&scoring)?, 3 - 2);

        Ok(())
    }

    #[test]
    fn unequal_lengths() {
        let err = AlignedPair::new(b"AC".to_vec(), b"A".to_vec(), b'-', 0_i32);
        assert!(matches!(err, Err(AlignError::Invariant(_))), "{err:?}");
    }

    #[test]
    fn rescore_unknown_symbol() -> Result<(), AlignError> {
        let pair = AlignedPair::new(b"AN".to_vec(), b"AC".to_vec(), b'-', 0_i32)?;
        let err = pair.rescore(&ScoringScheme::unit_dna());
        assert!(matches!(err, Err(AlignError::Domain { symbol: 'N', .. })), "{err:?}");
        Ok(())
    }
}
