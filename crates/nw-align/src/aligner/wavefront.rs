//! Filling the alignment matrix one anti-diagonal at a time, in parallel.

use rayon::prelude::*;

use crate::{AlignError, AlignedPair, AlignmentMatrix, ScoreValue};

use super::{Aligner, reconstruct};

/// The fewest cells of an anti-diagonal that a single rayon task will fill.
const MIN_CELLS_PER_TASK: usize = 256;

impl<T: ScoreValue> Aligner<'_, T> {
    /// Parallel version of [`Self::fill`].
    ///
    /// Cell `(i, j)` depends only on `(i - 1, j)`, `(i, j - 1)` and `(i - 1, j - 1)`, so all cells with the same `i + j` can be filled at the same time once
    /// the two previous anti-diagonals are complete. The resulting matrix is identical to the one from [`Self::fill`].
    ///
    /// # Errors
    ///
    /// See [`Self::fill`].
    pub fn par_fill(&self, v: &[u8], w: &[u8]) -> Result<AlignmentMatrix<T>, AlignError> {
        let (v, w, mut matrix) = self.prepare(v, w)?;
        let (n, m) = (v.len(), w.len());

        for d in 2..=(n + m) {
            // The interior cells (i, j) with i + j = d.
            let (lo, hi) = (d.saturating_sub(m).max(1), n.min(d - 1) + 1);
            if lo >= hi {
                continue;
            }

            // Only half-open ranges of `usize` are indexed parallel iterators.
            let diagonal = (lo..hi)
                .into_par_iter()
                .with_min_len(MIN_CELLS_PER_TASK)
                .map(|i| self.best_transition(&matrix, &v, &w, i, d - i))
                .collect::<Vec<_>>();

            for (i, (score, direction)) in (lo..hi).zip(diagonal) {
                matrix.set(i, d - i, score, direction);
            }
        }

        Ok(matrix)
    }

    /// Parallel version of [`Self::align`], using [`Self::par_fill`].
    ///
    /// # Errors
    ///
    /// See [`Self::fill`].
    pub fn par_align(&self, v: &[u8], w: &[u8]) -> Result<AlignedPair<T>, AlignError> {
        let matrix = self.par_fill(v, w)?;
        reconstruct(&matrix, v, w, self.scoring.gap())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::{AlignError, Aligner, ScoringScheme, TieBreak};

    #[test_case(b"", b"" ; "both empty")]
    #[test_case(b"", b"ACGT" ; "first empty")]
    #[test_case(b"G", b"" ; "second empty")]
    #[test_case(b"AC", b"AG" ; "worked example")]
    #[test_case(b"GATTACA", b"GCATGCT" ; "textbook")]
    #[test_case(b"ACGTACGTACGTTTGCA", b"ACG" ; "tall")]
    #[test_case(b"T", b"ACGTACGTACGTTTGCA" ; "wide")]
    fn matches_sequential(v: &[u8], w: &[u8]) -> Result<(), AlignError> {
        let scoring = ScoringScheme::<i32>::unit_dna();
        for tie_break in [TieBreak::LEFT_UP_DIAGONAL, TieBreak::DIAGONAL_UP_LEFT] {
            let aligner = Aligner::new(&scoring).with_tie_break(tie_break);
            assert_eq!(aligner.fill(v, w)?, aligner.par_fill(v, w)?);
            assert_eq!(aligner.align(v, w)?, aligner.par_align(v, w)?);
        }
        Ok(())
    }

    #[test]
    fn long_diagonals() -> Result<(), AlignError> {
        // Long enough that each anti-diagonal in the middle is split across several tasks.
        let v = b"ACGT".repeat(150);
        let w = b"GATTACA".repeat(90);

        let scoring = ScoringScheme::<i32>::uniform(b"ACGT", b'-', 2, -1, -2)?;
        let aligner = Aligner::new(&scoring);
        let matrix = aligner.par_fill(&v, &w)?;
        assert_eq!(matrix.rows(), 601);
        assert_eq!(matrix.cols(), 631);
        assert_eq!(matrix, aligner.fill(&v, &w)?);

        Ok(())
    }
}
