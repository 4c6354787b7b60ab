//! The dense scoring scheme used to fill alignment matrices.

use crate::{AlignError, ScoreValue, utils::printable};

mod table;

pub use table::SchemeTable;

/// Marks a byte that is neither in the alphabet nor the gap.
const NOT_IN_ALPHABET: u8 = u8::MAX;

/// The most symbols an alphabet may have. The gap takes the next row, and `NOT_IN_ALPHABET` must stay free.
pub const MAX_ALPHABET: usize = 254;

/// A total function from ordered pairs of symbols, including the gap, to integer scores.
///
/// The scheme is stored as a dense row-major table with one row and one column for each symbol of the alphabet, followed by one row and one column for the
/// gap. Every pair in `(alphabet ∪ {gap})²` has a score; partial schemes are rejected when they are constructed rather than when they are first used.
///
/// The alignment algorithm expects the scheme to be symmetric, i.e. `score(a, b) == score(b, a)`. This is not enforced, but can be checked with
/// [`Self::is_symmetric`].
///
/// # Examples
///
/// ```rust
/// use nw_align::ScoringScheme;
///
/// let scoring = ScoringScheme::<i32>::uniform(b"ACGT", b'-', 2, -1, -2)?;
/// assert_eq!(scoring.score(b'A', b'A')?, 2);
/// assert_eq!(scoring.score(b'A', b'C')?, -1);
/// assert_eq!(scoring.score(b'-', b'T')?, -2);
/// assert_eq!(scoring.score(b'-', b'-')?, 0);
/// assert!(scoring.score(b'N', b'A').is_err());
/// # Ok::<(), nw_align::AlignError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SchemeTable<T>", into = "SchemeTable<T>")]
#[serde(bound(serialize = "T: serde::Serialize", deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ScoringScheme<T: ScoreValue = i32> {
    /// The symbols of the alphabet, in the order of their rows in the table.
    alphabet: Vec<u8>,
    /// The gap symbol.
    gap: u8,
    /// Maps a byte to its row in the table, or to `NOT_IN_ALPHABET`.
    lookup: Vec<u8>,
    /// The scores, in row-major order.
    table: Vec<T>,
}

impl<T: ScoreValue> ScoringScheme<T> {
    /// Creates a scoring scheme from an explicit list of scored pairs.
    ///
    /// # Arguments
    ///
    /// * `alphabet`: The symbols that may appear in the sequences to align.
    /// * `gap`: The gap symbol. It must not be in the `alphabet`.
    /// * `pairs`: The score of each ordered pair of symbols. Every pair in `(alphabet ∪ {gap})²` must be given exactly once.
    ///
    /// # Errors
    ///
    /// - If the alphabet is empty, longer than [`MAX_ALPHABET`], contains duplicates, or contains the gap.
    /// - If a pair names a symbol outside `alphabet ∪ {gap}`.
    /// - If a pair is given more than once.
    /// - If any pair is missing.
    pub fn from_pairs<I>(alphabet: &[u8], gap: u8, pairs: I) -> Result<Self, AlignError>
    where
        I: IntoIterator<Item = ((u8, u8), T)>,
    {
        let lookup = build_lookup(alphabet, gap)?;
        let width = alphabet.len() + 1;

        let mut table: Vec<Option<T>> = vec![None; width * width];
        for ((a, b), score) in pairs {
            let (ia, ib) = (lookup[a as usize], lookup[b as usize]);
            if ia == NOT_IN_ALPHABET || ib == NOT_IN_ALPHABET {
                return Err(AlignError::Config(format!(
                    "the pair ({:?}, {:?}) names a symbol outside the alphabet",
                    printable(a),
                    printable(b)
                )));
            }
            let cell = &mut table[ia as usize * width + ib as usize];
            if cell.replace(score).is_some() {
                return Err(AlignError::Config(format!(
                    "the pair ({:?}, {:?}) is scored more than once",
                    printable(a),
                    printable(b)
                )));
            }
        }

        let symbols = alphabet.iter().copied().chain(core::iter::once(gap)).collect::<Vec<_>>();
        let table = table
            .into_iter()
            .enumerate()
            .map(|(k, score)| {
                score.ok_or_else(|| {
                    let (a, b) = (symbols[k / width], symbols[k % width]);
                    AlignError::Config(format!("no score was given for the pair ({:?}, {:?})", printable(a), printable(b)))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            alphabet: alphabet.to_vec(),
            gap,
            lookup,
            table,
        })
    }

    /// Creates a scoring scheme by evaluating `score` on every pair in `(alphabet ∪ {gap})²`.
    ///
    /// # Errors
    ///
    /// If the alphabet is empty or contains duplicates, or if it contains the gap.
    pub fn from_fn<F>(alphabet: &[u8], gap: u8, score: F) -> Result<Self, AlignError>
    where
        F: Fn(u8, u8) -> T,
    {
        let symbols = alphabet.iter().copied().chain(core::iter::once(gap)).collect::<Vec<_>>();
        let pairs = symbols.iter().flat_map(|&a| symbols.iter().map(move |&b| (a, b))).map(|(a, b)| ((a, b), score(a, b)));
        Self::from_pairs(alphabet, gap, pairs)
    }

    /// Creates a flat scoring scheme.
    ///
    /// Identical symbols score `match_score`, different symbols score `mismatch_score`, a symbol against the gap scores `gap_score` in either order, and the
    /// gap against itself scores zero.
    ///
    /// # Errors
    ///
    /// See [`Self::from_fn`].
    pub fn uniform(alphabet: &[u8], gap: u8, match_score: T, mismatch_score: T, gap_score: T) -> Result<Self, AlignError> {
        Self::from_fn(alphabet, gap, |a, b| match (a == gap, b == gap) {
            (true, true) => T::zero(),
            (true, false) | (false, true) => gap_score,
            (false, false) if a == b => match_score,
            (false, false) => mismatch_score,
        })
    }

    /// The unit scheme over the DNA alphabet `ACGT` with `-` as the gap.
    ///
    /// Matches score `+1`, while mismatches and gaps score `-1`. The gap against itself scores zero.
    pub fn unit_dna() -> Self {
        let (one, minus_one) = (T::one(), -T::one());
        Self::uniform(b"ACGT", b'-', one, minus_one, minus_one).unwrap_or_else(|e| unreachable!("The DNA alphabet is valid: {e}"))
    }

    /// Creates a copy of the scheme with every score converted by `caster`.
    pub fn cast<U: ScoreValue, F: Fn(T) -> U>(&self, caster: F) -> ScoringScheme<U> {
        ScoringScheme {
            alphabet: self.alphabet.clone(),
            gap: self.gap,
            lookup: self.lookup.clone(),
            table: self.table.iter().map(|&s| caster(s)).collect(),
        }
    }

    /// The symbols of the alphabet, excluding the gap.
    #[must_use]
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// The gap symbol.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// Whether `symbol` is in the alphabet. The gap is not.
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        symbol != self.gap && self.lookup[symbol as usize] != NOT_IN_ALPHABET
    }

    /// Returns the score of aligning `a` against `b`.
    ///
    /// # Errors
    ///
    /// If either symbol is neither in the alphabet nor the gap.
    pub fn score(&self, a: u8, b: u8) -> Result<T, AlignError> {
        let ia = self.index_of(a, 0, "a scoring query")?;
        let ib = self.index_of(b, 1, "a scoring query")?;
        Ok(self.score_indices(ia, ib))
    }

    /// Whether `score(a, b) == score(b, a)` for every pair of symbols, including the gap.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let width = self.width();
        (0..width).all(|i| (0..i).all(|j| self.table[i * width + j] == self.table[j * width + i]))
    }

    /// Maps the symbols of a sequence to their rows in the table.
    ///
    /// The gap is not allowed in input sequences.
    ///
    /// # Errors
    ///
    /// If any symbol in the sequence is not in the alphabet. The error names the first such symbol and its position.
    pub fn encode(&self, sequence: &[u8], context: &'static str) -> Result<Vec<u8>, AlignError> {
        sequence
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                if self.contains(symbol) {
                    Ok(self.lookup[symbol as usize])
                } else {
                    Err(AlignError::Domain {
                        symbol: printable(symbol),
                        position,
                        context,
                    })
                }
            })
            .collect()
    }

    /// The row of the gap in the table.
    #[expect(clippy::cast_possible_truncation)]
    pub(crate) const fn gap_index(&self) -> u8 {
        // The alphabet has at most `MAX_ALPHABET` symbols.
        self.alphabet.len() as u8
    }

    /// Checks that no sum of `columns` scores from the table can leave the range of `T`.
    ///
    /// Every cell of an alignment matrix for sequences of lengths `n` and `m` is a sum of at most `n + m` scores.
    pub(crate) fn check_range(&self, columns: usize) -> Result<(), AlignError> {
        let largest = self.table.iter().filter_map(|s| s.to_i128()).map(i128::unsigned_abs).max().unwrap_or(0);
        let bound = <T as num_traits::Bounded>::max_value().to_i128().map_or(0, i128::unsigned_abs);
        let columns_u128 = u128::try_from(columns).unwrap_or(u128::MAX);
        match largest.checked_mul(columns_u128) {
            Some(total) if total <= bound => Ok(()),
            _ => Err(AlignError::Overflow {
                columns,
                score_type: core::any::type_name::<T>(),
            }),
        }
    }

    /// Sums the scores of aligned columns, failing instead of overflowing.
    pub(crate) fn sum_columns<I>(&self, columns: I) -> Result<T, AlignError>
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        let mut total = T::zero();
        for (k, (a, b)) in columns.into_iter().enumerate() {
            total = num_traits::CheckedAdd::checked_add(&total, &self.score(a, b)?).ok_or_else(|| AlignError::Overflow {
                columns: k + 1,
                score_type: core::any::type_name::<T>(),
            })?;
        }
        Ok(total)
    }

    /// The score of a pair of symbols given by their rows in the table.
    pub(crate) fn score_indices(&self, a: u8, b: u8) -> T {
        self.table[a as usize * self.width() + b as usize]
    }

    /// The number of rows (and columns) in the table.
    const fn width(&self) -> usize {
        self.alphabet.len() + 1
    }

    /// The row of `symbol` in the table.
    fn index_of(&self, symbol: u8, position: usize, context: &'static str) -> Result<u8, AlignError> {
        match self.lookup[symbol as usize] {
            NOT_IN_ALPHABET => Err(AlignError::Domain {
                symbol: printable(symbol),
                position,
                context,
            }),
            i => Ok(i),
        }
    }
}

impl<T: ScoreValue> Default for ScoringScheme<T> {
    fn default() -> Self {
        Self::unit_dna()
    }
}

/// Checks the alphabet and the gap, and builds the byte-to-row lookup.
#[expect(clippy::cast_possible_truncation)]
fn build_lookup(alphabet: &[u8], gap: u8) -> Result<Vec<u8>, AlignError> {
    if alphabet.is_empty() {
        return Err(AlignError::Config("the alphabet must not be empty".to_string()));
    }
    if alphabet.len() > MAX_ALPHABET {
        return Err(AlignError::Config(format!(
            "the alphabet has {} symbols but at most {MAX_ALPHABET} are supported",
            alphabet.len()
        )));
    }

    let mut lookup = vec![NOT_IN_ALPHABET; 256];
    for (i, &symbol) in alphabet.iter().enumerate() {
        if symbol == gap {
            return Err(AlignError::Config(format!("the gap {:?} must not be in the alphabet", printable(gap))));
        }
        if lookup[symbol as usize] != NOT_IN_ALPHABET {
            return Err(AlignError::Config(format!("the symbol {:?} appears more than once in the alphabet", printable(symbol))));
        }
        lookup[symbol as usize] = i as u8;
    }
    lookup[gap as usize] = alphabet.len() as u8;

    Ok(lookup)
}
