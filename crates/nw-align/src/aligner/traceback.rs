//! Reconstructing an optimal alignment from a filled matrix.

use crate::{AlignError, AlignedPair, AlignmentMatrix, Direction, ScoreValue};

/// Walks the directions of a filled matrix back from the bottom-right cell to the origin and returns the aligned sequences.
///
/// Each step emits one column of the alignment:
///
/// - [`Direction::Left`]: a gap in `v` against `w[j - 1]`, then `j` decreases.
/// - [`Direction::Up`]: `v[i - 1]` against a gap in `w`, then `i` decreases.
/// - [`Direction::Diagonal`]: `v[i - 1]` against `w[j - 1]`, then both decrease.
///
/// The walk ends when both indices reach zero. Columns are collected from the end of the alignment and reversed at the end, so both aligned sequences have
/// the same length. The same matrix always yields the same alignment.
///
/// # Arguments
///
/// * `matrix`: A matrix filled for `v` against `w`.
/// * `v`: The first sequence.
/// * `w`: The second sequence.
/// * `gap`: The gap symbol to insert.
///
/// # Errors
///
/// If the matrix does not have `len(v) + 1` rows and `len(w) + 1` columns, or if the walk reaches a cell whose direction is [`Direction::Origin`] or would
/// step outside the matrix. Both mean the matrix was corrupted or never filled.
pub fn reconstruct<T: ScoreValue>(matrix: &AlignmentMatrix<T>, v: &[u8], w: &[u8], gap: u8) -> Result<AlignedPair<T>, AlignError> {
    if matrix.rows() != v.len() + 1 || matrix.cols() != w.len() + 1 {
        return Err(AlignError::Invariant(format!(
            "a {} x {} matrix cannot align sequences of lengths {} and {}",
            matrix.rows(),
            matrix.cols(),
            v.len(),
            w.len()
        )));
    }

    let (mut i, mut j) = (v.len(), w.len());
    let (mut rev_v, mut rev_w) = (Vec::with_capacity(i + j), Vec::with_capacity(i + j));

    while i > 0 || j > 0 {
        let direction = matrix.direction(i, j);
        let (prev_i, prev_j) = direction
            .step_back(i, j)
            .ok_or_else(|| AlignError::Invariant(format!("cannot step {direction} from cell ({i}, {j})")))?;

        let (a, b) = match direction {
            Direction::Left => (gap, w[j - 1]),
            Direction::Up => (v[i - 1], gap),
            Direction::Diagonal => (v[i - 1], w[j - 1]),
            Direction::Origin => unreachable!("There is no step back from the origin"),
        };
        rev_v.push(a);
        rev_w.push(b);

        (i, j) = (prev_i, prev_j);
    }

    rev_v.reverse();
    rev_w.reverse();

    AlignedPair::new(rev_v, rev_w, gap, matrix.final_score())
}

#[cfg(test)]
mod tests {
    use super::reconstruct;
    use crate::{AlignError, AlignmentMatrix, Direction};

    #[test]
    fn hand_built() -> Result<(), AlignError> {
        // "A" against "AC": a match, then a gap in the first sequence.
        let scores = vec![0, -1, -2, -1, 1, 0];
        let directions = vec![
            Direction::Origin,
            Direction::Left,
            Direction::Left,
            Direction::Up,
            Direction::Diagonal,
            Direction::Left,
        ];
        let matrix = AlignmentMatrix::<i32>::from_raw_parts(2, 3, scores, directions)?;

        let aligned = reconstruct(&matrix, b"A", b"AC", b'-')?;
        assert_eq!(aligned.aligned_v(), b"A-");
        assert_eq!(aligned.aligned_w(), b"AC");
        assert_eq!(aligned.score(), 0);

        Ok(())
    }

    #[test]
    fn unfilled_matrix() -> Result<(), AlignError> {
        let matrix = AlignmentMatrix::<i32>::from_raw_parts(2, 2, vec![0; 4], vec![Direction::Origin; 4])?;
        let err = reconstruct(&matrix, b"A", b"C", b'-');
        assert_eq!(err, Err(AlignError::Invariant("cannot step origin from cell (1, 1)".to_string())));
        Ok(())
    }

    #[test]
    fn stranded_on_boundary() -> Result<(), AlignError> {
        // The walk goes up into the first row, which then claims to come from above again.
        let directions = vec![Direction::Origin, Direction::Up, Direction::Up, Direction::Up];
        let matrix = AlignmentMatrix::<i32>::from_raw_parts(2, 2, vec![0; 4], directions)?;
        let err = reconstruct(&matrix, b"A", b"C", b'-');
        assert_eq!(err, Err(AlignError::Invariant("cannot step up from cell (0, 1)".to_string())));
        Ok(())
    }

    #[test]
    fn wrong_shape() -> Result<(), AlignError> {
        let matrix = AlignmentMatrix::<i32>::from_raw_parts(2, 2, vec![0; 4], vec![Direction::Origin; 4])?;
        let err = reconstruct(&matrix, b"AC", b"C", b'-');
        assert!(matches!(err, Err(AlignError::Invariant(_))), "{err:?}");
        Ok(())
    }
}
