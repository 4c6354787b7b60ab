//! Scoring schemes available from the command line.

use std::path::Path;

use nw_align::ScoringScheme;

/// The built-in scoring schemes.
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ShellScoring {
    /// DNA with match = 1, mismatch = -1, and gap = -1.
    #[default]
    Unit,
    /// DNA with match = 0, mismatch = -1, and gap = -1. The optimal score is the negated edit distance.
    Edit,
}

impl core::fmt::Display for ShellScoring {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Unit => "unit",
            Self::Edit => "edit",
        };
        write!(f, "{s}")
    }
}

impl ShellScoring {
    /// Get the scheme for use in alignment.
    pub fn get(&self) -> ScoringScheme<i64> {
        match self {
            Self::Unit => ScoringScheme::unit_dna(),
            Self::Edit => ScoringScheme::uniform(b"ACGT", b'-', 0, -1, -1).unwrap_or_else(|e| unreachable!("The DNA alphabet is valid: {e}")),
        }
    }
}

/// Reads a scoring scheme from a `.json`, `.yaml` or `.yml` file in nested-table form.
pub fn read<P: AsRef<Path>>(path: P) -> Result<ScoringScheme<i64>, String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| format!("Failed to read scoring scheme from {path:?}: {e}"))?;

    let scoring: ScoringScheme<i64> = match crate::utils::extension(path)?.as_str() {
        "json" => serde_json::from_str(&contents).map_err(|e| format!("Invalid scoring scheme in {path:?}: {e}"))?,
        "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| format!("Invalid scoring scheme in {path:?}: {e}"))?,
        ext => return Err(format!("Unsupported scoring scheme format '{ext}'. Use 'json' or 'yaml'.")),
    };

    if !scoring.is_symmetric() {
        ftlog::warn!("The scoring scheme in {path:?} is not symmetric. Scores of v against w may differ from w against v.");
    }

    Ok(scoring)
}
