//! Filling the Needleman-Wunsch matrix and aligning pairs of sequences.

use rayon::prelude::*;

use crate::{AlignError, AlignedPair, AlignmentMatrix, Direction, ScoreValue, ScoringScheme};

mod tie_break;
mod traceback;
mod wavefront;

pub use tie_break::TieBreak;
pub use traceback::reconstruct;

/// The default ceiling on the number of cells in an alignment matrix.
///
/// With 32-bit scores this is a little under 500 MB per matrix.
pub const DEFAULT_MAX_CELLS: usize = 100_000_000;

/// Aligns pairs of sequences with the Needleman-Wunsch algorithm under a fixed scoring scheme.
///
/// For sequences `v` and `w` of lengths `n` and `m`, the aligner fills an `(n + 1) x (m + 1)` [`AlignmentMatrix`] where
///
/// - `best(0, 0) = 0`,
/// - `best(i, 0) = best(i - 1, 0) + score(v[i - 1], gap)`,
/// - `best(0, j) = best(0, j - 1) + score(gap, w[j - 1])`, and
/// - `best(i, j) = max(left, up, diagonal)` with
///   - `left = best(i, j - 1) + score(gap, w[j - 1])`,
///   - `up = best(i - 1, j) + score(v[i - 1], gap)`,
///   - `diagonal = best(i - 1, j - 1) + score(v[i - 1], w[j - 1])`.
///
/// Ties among the three candidates are broken by the [`TieBreak`] policy. The traceback then walks the recorded directions back from `(n, m)`.
///
/// The matrix takes `Θ(n·m)` time and memory. Before allocating, the aligner checks that it would not exceed a ceiling on the number of cells.
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct Aligner<'a, T: ScoreValue> {
    /// The scoring scheme.
    scoring: &'a ScoringScheme<T>,
    /// The largest number of cells a matrix may have.
    max_cells: usize,
    /// The policy for choosing among equally good transitions.
    tie_break: TieBreak,
}

impl<'a, T: ScoreValue> Aligner<'a, T> {
    /// Creates an aligner with the default cell ceiling and tie-break policy.
    pub const fn new(scoring: &'a ScoringScheme<T>) -> Self {
        Self {
            scoring,
            max_cells: DEFAULT_MAX_CELLS,
            tie_break: TieBreak::LEFT_UP_DIAGONAL,
        }
    }

    /// Sets the largest number of cells an alignment matrix may have.
    pub const fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Sets the policy for choosing among equally good transitions.
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// The scoring scheme.
    #[must_use]
    pub const fn scoring(&self) -> &'a ScoringScheme<T> {
        self.scoring
    }

    /// The largest number of cells an alignment matrix may have.
    #[must_use]
    pub const fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// The tie-break policy.
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Fills the alignment matrix for `v` against `w`.
    ///
    /// # Errors
    ///
    /// - If either sequence has a symbol outside the alphabet of the scoring scheme.
    /// - If the matrix would have more cells than the ceiling.
    /// - If a score in the matrix could overflow `T`.
    pub fn fill(&self, v: &[u8], w: &[u8]) -> Result<AlignmentMatrix<T>, AlignError> {
        let (v, w, mut matrix) = self.prepare(v, w)?;

        // On iteration (i, j), we fill in the cell at (i + 1, j + 1).
        for i in 0..v.len() {
            for j in 0..w.len() {
                let (score, direction) = self.best_transition(&matrix, &v, &w, i + 1, j + 1);
                matrix.set(i + 1, j + 1, score, direction);
            }
        }

        Ok(matrix)
    }

    /// Aligns `v` against `w`, returning one optimal alignment and its score.
    ///
    /// # Errors
    ///
    /// See [`Self::fill`].
    pub fn align(&self, v: &[u8], w: &[u8]) -> Result<AlignedPair<T>, AlignError> {
        let matrix = self.fill(v, w)?;
        reconstruct(&matrix, v, w, self.scoring.gap())
    }

    /// Returns the optimal score of aligning `v` against `w` without reconstructing an alignment.
    ///
    /// # Errors
    ///
    /// See [`Self::fill`].
    pub fn score(&self, v: &[u8], w: &[u8]) -> Result<T, AlignError> {
        self.fill(v, w).map(|matrix| matrix.final_score())
    }

    /// Aligns each pair of sequences in turn.
    ///
    /// The results are in the same order as the pairs. A failure on one pair does not stop the others.
    pub fn align_pairs<V, W>(&self, pairs: &[(V, W)]) -> Vec<Result<AlignedPair<T>, AlignError>>
    where
        V: AsRef<[u8]>,
        W: AsRef<[u8]>,
    {
        ftlog::info!("Aligning {} pairs of sequences.", pairs.len());
        pairs.iter().map(|(v, w)| self.align(v.as_ref(), w.as_ref())).collect()
    }

    /// Parallel version of [`Self::align_pairs`].
    ///
    /// Each pair is aligned on a single thread with its own matrix.
    pub fn par_align_pairs<V, W>(&self, pairs: &[(V, W)]) -> Vec<Result<AlignedPair<T>, AlignError>>
    where
        V: AsRef<[u8]> + Send + Sync,
        W: AsRef<[u8]> + Send + Sync,
    {
        ftlog::info!("Aligning {} pairs of sequences in parallel.", pairs.len());
        pairs.par_iter().map(|(v, w)| self.align(v.as_ref(), w.as_ref())).collect()
    }

    /// Checks the sequences and the size of the matrix, then allocates the matrix and fills in its first row and column.
    ///
    /// Returns the encoded sequences along with the matrix.
    fn prepare(&self, v: &[u8], w: &[u8]) -> Result<(Vec<u8>, Vec<u8>, AlignmentMatrix<T>), AlignError> {
        let v = self.scoring.encode(v, "the first sequence")?;
        let w = self.scoring.encode(w, "the second sequence")?;

        let (rows, cols) = (v.len() + 1, w.len() + 1);
        match rows.checked_mul(cols) {
            Some(cells) if cells <= self.max_cells => (),
            _ => {
                return Err(AlignError::Resource {
                    rows,
                    cols,
                    max_cells: self.max_cells,
                });
            }
        }

        // With this, no sum below can overflow.
        self.scoring.check_range(v.len() + w.len())?;

        ftlog::debug!("Filling a {rows} x {cols} alignment matrix.");
        let mut matrix = AlignmentMatrix::zeroed(rows, cols);

        let gap = self.scoring.gap_index();

        // The first column is the cost of aligning prefixes of `v` against nothing.
        for (i, &a) in v.iter().enumerate() {
            let score = matrix.score(i, 0) + self.scoring.score_indices(a, gap);
            matrix.set(i + 1, 0, score, Direction::Up);
        }

        // The first row is the cost of aligning prefixes of `w` against nothing.
        for (j, &b) in w.iter().enumerate() {
            let score = matrix.score(0, j) + self.scoring.score_indices(gap, b);
            matrix.set(0, j + 1, score, Direction::Left);
        }

        Ok((v, w, matrix))
    }

    /// Computes the best score and direction of the interior cell `(i, j)` from its three predecessors.
    ///
    /// `v` and `w` are the encoded sequences, and `i` and `j` are both at least 1.
    fn best_transition(&self, matrix: &AlignmentMatrix<T>, v: &[u8], w: &[u8], i: usize, j: usize) -> (T, Direction) {
        let gap = self.scoring.gap_index();
        let (a, b) = (v[i - 1], w[j - 1]);

        let left = matrix.score(i, j - 1) + self.scoring.score_indices(gap, b);
        let up = matrix.score(i - 1, j) + self.scoring.score_indices(a, gap);
        let diagonal = matrix.score(i - 1, j - 1) + self.scoring.score_indices(a, b);

        self.tie_break.choose(left, up, diagonal)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Aligner, TieBreak};
    use crate::{AlignError, Direction, ScoringScheme};

    #[test]
    fn worked_example() -> Result<(), AlignError> {
        let scoring = ScoringScheme::<i32>::unit_dna();
        let aligner = Aligner::new(&scoring);

        let matrix = aligner.fill(b"AC", b"AG")?;
        assert_eq!(matrix.score_rows(), vec![vec![0, -1, -2], vec![-1, 1, 0], vec![-2, 0, 0]]);
        assert_eq!(matrix.direction(0, 0), Direction::Origin);
        assert_eq!(matrix.direction(1, 2), Direction::Left);
        assert_eq!(matrix.direction(2, 1), Direction::Up);
        assert_eq!(matrix.direction(2, 2), Direction::Diagonal);

        let aligned = aligner.align(b"AC", b"AG")?;
        assert_eq!(aligned.aligned_v(), b"AC");
        assert_eq!(aligned.aligned_w(), b"AG");
        assert_eq!(aligned.score(), 0);

        Ok(())
    }

    #[test]
    fn boundaries() -> Result<(), AlignError> {
        let scoring = ScoringScheme::<i32>::uniform(b"ACGT", b'-', 1, -1, -2)?;
        let matrix = Aligner::new(&scoring).fill(b"ACG", b"TT")?;

        assert_eq!(matrix.row(0), &[0, -2, -4]);
        let first_col = (0..matrix.rows()).map(|i| matrix.score(i, 0)).collect::<Vec<_>>();
        assert_eq!(first_col, vec![0, -2, -4, -6]);

        assert!((1..matrix.rows()).all(|i| matrix.direction(i, 0) == Direction::Up));
        assert!((1..matrix.cols()).all(|j| matrix.direction(0, j) == Direction::Left));

        Ok(())
    }

    #[test]
    fn tie_break_policies() -> Result<(), AlignError> {
        let scoring = ScoringScheme::<i32>::unit_dna();

        let aligned = Aligner::new(&scoring).align(b"AT", b"TA")?;
        assert_eq!(aligned.aligned_v(), b"AT-");
        assert_eq!(aligned.aligned_w(), b"-TA");
        assert_eq!(aligned.score(), -1);

        let up_first = TieBreak::new([Direction::Up, Direction::Left, Direction::Diagonal])?;
        let aligned = Aligner::new(&scoring).with_tie_break(up_first).align(b"AT", b"TA")?;
        assert_eq!(aligned.aligned_v(), b"-AT");
        assert_eq!(aligned.aligned_w(), b"TA-");
        assert_eq!(aligned.score(), -1);

        Ok(())
    }

    #[test_case(b"ACGN", b"ACG" ; "first")]
    #[test_case(b"ACG", b"A-G" ; "gap in second")]
    fn domain_errors(v: &[u8], w: &[u8]) {
        let scoring = ScoringScheme::<i32>::unit_dna();
        let err = Aligner::new(&scoring).align(v, w);
        assert!(matches!(err, Err(AlignError::Domain { .. })), "{err:?}");
    }

    #[test]
    fn resource_ceiling() -> Result<(), AlignError> {
        let scoring = ScoringScheme::<i32>::unit_dna();
        let aligner = Aligner::new(&scoring).with_max_cells(12);

        // 4 x 3 = 12 cells fit exactly.
        assert_eq!(aligner.score(b"ACG", b"AC")?, 1);

        let err = aligner.fill(b"ACGT", b"AC");
        assert_eq!(
            err,
            Err(AlignError::Resource {
                rows: 5,
                cols: 3,
                max_cells: 12
            })
        );

        Ok(())
    }

    #[test]
    fn narrow_scores() -> Result<(), AlignError> {
        let scoring = ScoringScheme::<i8>::unit_dna();
        let aligner = Aligner::new(&scoring);

        let aligned = aligner.align(b"GATTACA", b"GATACA")?;
        assert_eq!(aligned.score(), 5);

        let long = vec![b'A'; 200];
        let err = aligner.align(&long, b"C");
        assert_eq!(
            err,
            Err(AlignError::Overflow {
                columns: 201,
                score_type: "i8"
            })
        );
        assert!(matches!(aligner.par_fill(&long, b"C"), Err(AlignError::Overflow { .. })));

        let steep = ScoringScheme::<i32>::uniform(b"ACGT", b'-', 1, -1, -1_000_000_000)?;
        let aligner = Aligner::new(&steep);
        assert_eq!(aligner.score(b"AA", b"")?, -2_000_000_000);
        assert!(matches!(aligner.score(b"AAA", b""), Err(AlignError::Overflow { columns: 3, .. })));

        Ok(())
    }

    #[test]
    fn batch() -> Result<(), AlignError> {
        let scoring = ScoringScheme::<i32>::unit_dna();
        let aligner = Aligner::new(&scoring);
        let pairs = [("AC", "AG"), ("AT", "TA"), ("AX", "A"), ("", "GT")];

        let results = aligner.align_pairs(&pairs);
        let par_results = aligner.par_align_pairs(&pairs);
        assert_eq!(results, par_results);

        assert_eq!(results[0].as_ref().map(|a| a.score()), Ok(0));
        assert_eq!(results[1].as_ref().map(|a| a.score()), Ok(-1));
        assert!(results[2].is_err());
        assert_eq!(results[3].as_ref().map(|a| a.aligned_v().to_vec()), Ok(b"--".to_vec()));

        Ok(())
    }
}
