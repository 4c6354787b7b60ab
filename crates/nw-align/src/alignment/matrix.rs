//! The dynamic programming table of the Needleman-Wunsch algorithm.

use crate::{AlignError, ScoreValue};

use super::Direction;

/// The best scores of aligning every pair of prefixes of two sequences, together with the direction from which each best score was reached.
///
/// The matrix has `n + 1` rows and `m + 1` columns for sequences of lengths `n` and `m`. Cell `(i, j)` holds the best score of aligning the first `i`
/// symbols of the first sequence against the first `j` symbols of the second. Both tables are stored as contiguous row-major buffers.
///
/// A matrix is built fresh for every alignment and is not modified once it is handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct AlignmentMatrix<T: ScoreValue> {
    /// The number of rows.
    rows: usize,
    /// The number of columns.
    cols: usize,
    /// The best score of each cell.
    scores: Vec<T>,
    /// The direction of each cell.
    directions: Vec<Direction>,
}

impl<T: ScoreValue> AlignmentMatrix<T> {
    /// Allocates a matrix with every score zero and every direction [`Direction::Origin`].
    ///
    /// The caller must have checked that `rows * cols` does not overflow and is within the configured ceiling.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        let size = rows * cols;
        Self {
            rows,
            cols,
            scores: vec![T::zero(); size],
            directions: vec![Direction::Origin; size],
        }
    }

    /// Creates a matrix from row-major buffers of scores and directions.
    ///
    /// No check is made that the scores and directions are consistent with any pair of sequences; [`reconstruct`](crate::reconstruct) reports
    /// inconsistencies it meets during traceback.
    ///
    /// # Errors
    ///
    /// - If either dimension is zero.
    /// - If either buffer does not have `rows * cols` elements.
    pub fn from_raw_parts(rows: usize, cols: usize, scores: Vec<T>, directions: Vec<Direction>) -> Result<Self, AlignError> {
        if rows == 0 || cols == 0 {
            return Err(AlignError::Invariant(format!("a matrix must have at least one row and column, got {rows} x {cols}")));
        }
        let size = rows.checked_mul(cols).ok_or_else(|| AlignError::Invariant(format!("{rows} x {cols} cells overflow")))?;
        if scores.len() != size || directions.len() != size {
            return Err(AlignError::Invariant(format!(
                "a {rows} x {cols} matrix needs {size} cells, got {} scores and {} directions",
                scores.len(),
                directions.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            scores,
            directions,
        })
    }

    /// The number of rows, i.e. one more than the length of the first sequence.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns, i.e. one more than the length of the second sequence.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the best score and direction of cell `(i, j)`, or `None` if the cell is outside the matrix.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<(T, Direction)> {
        (i < self.rows && j < self.cols).then(|| {
            let k = self.flat_index(i, j);
            (self.scores[k], self.directions[k])
        })
    }

    /// The best score of cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// If the cell is outside the matrix.
    pub fn score(&self, i: usize, j: usize) -> T {
        self.scores[self.checked_index(i, j)]
    }

    /// The direction of cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// If the cell is outside the matrix.
    pub fn direction(&self, i: usize, j: usize) -> Direction {
        self.directions[self.checked_index(i, j)]
    }

    /// The score of the optimal global alignment, i.e. the score in the bottom-right cell.
    pub fn final_score(&self) -> T {
        self.scores[self.scores.len() - 1]
    }

    /// The best scores in row `i`.
    ///
    /// # Panics
    ///
    /// If `i` is not a row of the matrix.
    #[must_use]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "Row {i} is outside a matrix with {} rows", self.rows);
        &self.scores[i * self.cols..(i + 1) * self.cols]
    }

    /// The best scores, one vector per row.
    #[must_use]
    pub fn score_rows(&self) -> Vec<Vec<T>> {
        self.scores.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    /// Sets the best score and direction of cell `(i, j)`.
    pub(crate) fn set(&mut self, i: usize, j: usize, score: T, direction: Direction) {
        let k = self.flat_index(i, j);
        self.scores[k] = score;
        self.directions[k] = direction;
    }

    /// The position of cell `(i, j)` in the row-major buffers.
    const fn flat_index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// As [`Self::flat_index`], but panics with a clear message if the cell is outside the matrix.
    fn checked_index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "Cell ({i}, {j}) is outside a {} x {} matrix",
            self.rows,
            self.cols
        );
        self.flat_index(i, j)
    }
}
