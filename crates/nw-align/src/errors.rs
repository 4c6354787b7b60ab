//! Errors raised while building scoring schemes, filling alignment matrices, and tracing back alignments.

/// The ways in which an alignment can fail.
///
/// None of these are retried anywhere in the crate: every operation is a deterministic function of its inputs, so repeating a failed call would fail again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AlignError {
    /// A symbol outside the declared alphabet was found in an input sequence or in a scoring query.
    #[error("symbol {symbol:?} at position {position} of {context} is not in the alphabet")]
    Domain {
        /// The offending symbol.
        symbol: char,
        /// The 0-based position of the symbol in the sequence (or in the queried pair).
        position: usize,
        /// Where the symbol was found.
        context: &'static str,
    },
    /// The alignment matrix for the requested sequences would exceed the configured ceiling on the number of cells.
    #[error("an alignment matrix of {rows} x {cols} cells exceeds the limit of {max_cells} cells")]
    Resource {
        /// The number of rows requested, i.e. one more than the length of the first sequence.
        rows: usize,
        /// The number of columns requested, i.e. one more than the length of the second sequence.
        cols: usize,
        /// The configured ceiling.
        max_cells: usize,
    },
    /// Scores summed over this many alignment columns could leave the range of the score type.
    #[error("scores summed over {columns} alignment columns could overflow {score_type}")]
    Overflow {
        /// The number of columns, i.e. at most the sum of the lengths of the two sequences.
        columns: usize,
        /// The name of the score type.
        score_type: &'static str,
    },
    /// A traceback met a matrix that was corrupted or never filled.
    #[error("alignment matrix invariant violated: {0}")]
    Invariant(String),
    /// A scoring scheme or tie-break policy was incomplete or inconsistent.
    #[error("invalid alignment configuration: {0}")]
    Config(String),
}

impl AlignError {
    /// Whether this error was caused by the caller's input rather than by a defect in the crate.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Invariant(_))
    }
}

#[cfg(test)]
mod tests {
    use super::AlignError;

    #[test]
    fn messages() {
        let err = AlignError::Domain {
            symbol: 'N',
            position: 3,
            context: "the first sequence",
        };
        assert_eq!(err.to_string(), "symbol 'N' at position 3 of the first sequence is not in the alphabet");
        assert!(err.is_recoverable());

        let err = AlignError::Resource {
            rows: 11,
            cols: 21,
            max_cells: 100,
        };
        assert_eq!(err.to_string(), "an alignment matrix of 11 x 21 cells exceeds the limit of 100 cells");

        let err = AlignError::Overflow {
            columns: 201,
            score_type: "i8",
        };
        assert_eq!(err.to_string(), "scores summed over 201 alignment columns could overflow i8");
        assert!(err.is_recoverable());

        let err = AlignError::Invariant("Origin at (1, 2)".to_string());
        assert!(!err.is_recoverable());
    }
}
