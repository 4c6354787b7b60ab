//! Comparing two CSV files of aligned pairs.

use std::path::Path;

use nw_align::{ScoringScheme, verify};

use crate::data;

/// What must agree for two rows to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum CompareBy {
    /// The aligned strings must be identical.
    #[default]
    Strings,
    /// The recomputed scores of the aligned strings must be equal.
    Scores,
}

impl core::fmt::Display for CompareBy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Strings => "strings",
            Self::Scores => "scores",
        };
        write!(f, "{s}")
    }
}

/// Compares the aligned pairs in two CSV files row by row.
pub fn compare_csv<P: AsRef<Path>>(first: P, second: P, by: CompareBy, scoring: &ScoringScheme<i64>) -> Result<verify::Comparison, String> {
    let first = data::read_results(first)?;
    let second = data::read_results(second)?;

    let first = first.iter().map(data::ResultRecord::aligned).collect::<Result<Vec<_>, _>>()?;
    let second = second.iter().map(data::ResultRecord::aligned).collect::<Result<Vec<_>, _>>()?;

    let comparison = match by {
        CompareBy::Strings => verify::compare_aligned(&first, &second)?,
        CompareBy::Scores => verify::compare_scores(&first, &second, scoring)?,
    };

    if comparison.is_consistent() {
        ftlog::info!("Compared by {by}: {comparison}");
    } else {
        ftlog::warn!("Compared by {by}: {comparison}");
    }

    Ok(comparison)
}
