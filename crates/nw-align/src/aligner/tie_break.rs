//! The policy for choosing among equally good transitions when filling a cell.

use crate::{AlignError, Direction, ScoreValue};

/// The priority order among the three transitions when more than one of them reaches the best score of a cell.
///
/// The choice does not change the optimal score, but it decides which of several optimal alignments the traceback returns. Tools that compare aligned
/// strings verbatim across aligners need every aligner to use the same order.
///
/// The default is [`TieBreak::LEFT_UP_DIAGONAL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct TieBreak([Direction; 3]);

impl TieBreak {
    /// Prefer a gap in the first sequence, then a gap in the second, then a match or substitution.
    pub const LEFT_UP_DIAGONAL: Self = Self([Direction::Left, Direction::Up, Direction::Diagonal]);

    /// Prefer a match or substitution, then a gap in the second sequence, then a gap in the first. This tends to produce shorter alignments.
    pub const DIAGONAL_UP_LEFT: Self = Self([Direction::Diagonal, Direction::Up, Direction::Left]);

    /// Creates a policy from a priority order, highest priority first.
    ///
    /// # Errors
    ///
    /// If `order` is not a permutation of [`Direction::MOVES`].
    pub fn new(order: [Direction; 3]) -> Result<Self, AlignError> {
        if Direction::MOVES.iter().all(|d| order.contains(d)) {
            Ok(Self(order))
        } else {
            Err(AlignError::Config(format!(
                "a tie-break order must name each of left, up and diagonal exactly once, got {order:?}"
            )))
        }
    }

    /// The priority order, highest priority first.
    #[must_use]
    pub const fn order(&self) -> [Direction; 3] {
        self.0
    }

    /// Returns the best of the three candidate scores and the highest-priority direction that reaches it.
    pub(crate) fn choose<T: ScoreValue>(self, left: T, up: T, diagonal: T) -> (T, Direction) {
        let best = left.max(up).max(diagonal);
        let value = |d: Direction| match d {
            Direction::Left => left,
            Direction::Up => up,
            Direction::Diagonal => diagonal,
            Direction::Origin => unreachable!("A tie-break order never contains the origin"),
        };

        let direction = self
            .0
            .into_iter()
            .find(|&d| value(d) == best)
            .unwrap_or_else(|| unreachable!("One of the candidates is the maximum"));

        (best, direction)
    }
}

impl Default for TieBreak {
    fn default() -> Self {
        Self::LEFT_UP_DIAGONAL
    }
}

impl core::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}-{b}-{c}")
    }
}

impl core::str::FromStr for TieBreak {
    type Err = AlignError;

    /// Parses an order such as `left-up-diagonal`. Each direction may be abbreviated to its first letter, e.g. `dul`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |name: &str| match name.to_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "up" | "u" => Ok(Direction::Up),
            "diagonal" | "diag" | "d" => Ok(Direction::Diagonal),
            _ => Err(AlignError::Config(format!("unknown direction {name:?} in tie-break order {s:?}"))),
        };

        let names: Vec<String> = if s.contains(['-', ',']) {
            s.split(['-', ',']).map(|n| n.trim().to_string()).collect()
        } else {
            s.chars().map(String::from).collect()
        };

        match names.as_slice() {
            [a, b, c] => Self::new([parse(a)?, parse(b)?, parse(c)?]),
            _ => Err(AlignError::Config(format!("a tie-break order needs three directions, got {s:?}"))),
        }
    }
}
