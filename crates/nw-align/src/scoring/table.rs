//! The nested-table form of a scoring scheme, used for (de)serialization.

use std::collections::BTreeMap;

use crate::{AlignError, ScoreValue};

use super::ScoringScheme;

/// A scoring scheme as a nested table, keyed first by the symbol from the first sequence and then by the symbol from the second.
///
/// This is the form in which [`ScoringScheme`]s are read from and written to configuration files, e.g. in YAML:
///
/// ```yaml
/// alphabet: AC
/// gap: '-'
/// table:
///   A: { A: 1, C: -1, '-': -1 }
///   C: { A: -1, C: 1, '-': -1 }
///   '-': { A: -1, C: -1, '-': 0 }
/// ```
///
/// All symbols must be ASCII characters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SchemeTable<T> {
    /// The symbols of the alphabet, excluding the gap.
    pub alphabet: String,
    /// The gap symbol.
    pub gap: char,
    /// The score of each ordered pair of symbols.
    pub table: BTreeMap<char, BTreeMap<char, T>>,
}

/// Converts an ASCII character to a byte.
fn ascii_byte(c: char) -> Result<u8, AlignError> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(AlignError::Config(format!("only ASCII symbols are supported, found {c:?}")))
    }
}

impl<T: ScoreValue> TryFrom<SchemeTable<T>> for ScoringScheme<T> {
    type Error = AlignError;

    fn try_from(value: SchemeTable<T>) -> Result<Self, Self::Error> {
        let alphabet = value.alphabet.chars().map(ascii_byte).collect::<Result<Vec<_>, _>>()?;
        let gap = ascii_byte(value.gap)?;

        let pairs = value
            .table
            .into_iter()
            .flat_map(|(a, row)| row.into_iter().map(move |(b, score)| (a, b, score)))
            .map(|(a, b, score)| Ok(((ascii_byte(a)?, ascii_byte(b)?), score)))
            .collect::<Result<Vec<_>, AlignError>>()?;

        Self::from_pairs(&alphabet, gap, pairs)
    }
}

impl<T: ScoreValue> From<ScoringScheme<T>> for SchemeTable<T> {
    fn from(value: ScoringScheme<T>) -> Self {
        let symbols = value.alphabet.iter().copied().chain(core::iter::once(value.gap)).collect::<Vec<_>>();
        let table = symbols
            .iter()
            .enumerate()
            .map(|(i, &a)| {
                let row = symbols.iter().enumerate().map(|(j, &b)| (b as char, value.table[i * symbols.len() + j])).collect();
                (a as char, row)
            })
            .collect();

        Self {
            alphabet: value.alphabet.iter().map(|&b| b as char).collect(),
            gap: value.gap as char,
            table,
        }
    }
}
