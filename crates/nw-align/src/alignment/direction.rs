//! The directions recorded in the traceback table.

/// The transition that produced the best score of a cell in the alignment matrix.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
#[must_use]
pub enum Direction {
    /// Left, for a gap in the first sequence against a symbol of the second.
    Left,
    /// Up, for a symbol of the first sequence against a gap in the second.
    Up,
    /// Diagonal (Up and Left), for a match or substitution.
    Diagonal,
    /// The top-left cell, where every traceback ends. Also marks cells that were never filled.
    #[default]
    Origin,
}

impl Direction {
    /// The three transitions of the recurrence, i.e. every direction except [`Direction::Origin`].
    pub const MOVES: [Self; 3] = [Self::Left, Self::Up, Self::Diagonal];

    /// Returns the cell reached by stepping back from `(i, j)` in this direction, or `None` if the step would leave the matrix or if this is the origin.
    #[must_use]
    pub const fn step_back(self, i: usize, j: usize) -> Option<(usize, usize)> {
        match self {
            Self::Left if j > 0 => Some((i, j - 1)),
            Self::Up if i > 0 => Some((i - 1, j)),
            Self::Diagonal if i > 0 && j > 0 => Some((i - 1, j - 1)),
            _ => None,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Diagonal => "diagonal",
            Self::Origin => "origin",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn step_back() {
        assert_eq!(Direction::Left.step_back(2, 3), Some((2, 2)));
        assert_eq!(Direction::Up.step_back(2, 3), Some((1, 3)));
        assert_eq!(Direction::Diagonal.step_back(2, 3), Some((1, 2)));

        assert_eq!(Direction::Left.step_back(2, 0), None);
        assert_eq!(Direction::Up.step_back(0, 3), None);
        assert_eq!(Direction::Diagonal.step_back(0, 3), None);
        assert_eq!(Direction::Origin.step_back(2, 3), None);
    }
}
