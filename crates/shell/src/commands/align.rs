//! Aligning every pair of sequences in a CSV file.

use std::path::Path;

use nw_align::{Aligner, normalize};
use rayon::prelude::*;

use crate::data::{self, PairRecord, ResultRecord};

/// How to prepare the raw sequences before aligning them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalization {
    /// Upper-case every letter.
    pub uppercase: bool,
    /// Drop every symbol outside the alphabet.
    pub clean: bool,
}

impl Normalization {
    /// Applies the normalization to a single sequence.
    fn apply(self, sequence: &str, alphabet: &[u8]) -> Vec<u8> {
        let sequence = if self.uppercase {
            normalize::uppercase(sequence.as_bytes())
        } else {
            sequence.as_bytes().to_vec()
        };
        if self.clean { normalize::clean(&sequence, alphabet) } else { sequence }
    }
}

/// Aligns the pairs in `inp_path` and writes the results to `out_path`.
///
/// Nothing is written unless every pair aligns. The rows that failed are logged and named in the error.
///
/// Returns the number of pairs aligned.
pub fn align_csv<P: AsRef<Path>>(
    aligner: &Aligner<i64>,
    inp_path: P,
    out_path: P,
    normalization: Normalization,
    parallel: bool,
) -> Result<usize, String> {
    crate::utils::check_out_path(&out_path)?;

    let records = data::read_pairs(&inp_path)?;
    let records = align_records(aligner, records, normalization, parallel)?;
    data::write_results(&out_path, &records)?;

    Ok(records.len())
}

/// Aligns each pair and collects the records to write.
pub fn align_records(
    aligner: &Aligner<i64>,
    records: Vec<PairRecord>,
    normalization: Normalization,
    parallel: bool,
) -> Result<Vec<ResultRecord>, String> {
    let alphabet = aligner.scoring().alphabet();
    let prepare = |r: &PairRecord| (normalization.apply(&r.sequence1, alphabet), normalization.apply(&r.sequence2, alphabet));

    ftlog::info!(
        "Aligning {} pairs with tie-break order {} (parallel: {parallel}).",
        records.len(),
        aligner.tie_break()
    );
    let results = if parallel {
        let pairs = records.par_iter().map(prepare).collect::<Vec<_>>();
        aligner.par_align_pairs(&pairs)
    } else {
        let pairs = records.iter().map(prepare).collect::<Vec<_>>();
        aligner.align_pairs(&pairs)
    };

    let mut failed = Vec::new();
    let mut aligned = Vec::with_capacity(results.len());
    for (i, (record, result)) in records.into_iter().zip(results).enumerate() {
        match result {
            Ok(pair) => aligned.push(ResultRecord::new(record, &pair)),
            Err(e) => {
                ftlog::error!("Row {}: {e}", i + 1);
                failed.push(i + 1);
            }
        }
    }

    if failed.is_empty() {
        Ok(aligned)
    } else {
        Err(format!(
            "Failed to align {} of {} pairs, at rows {failed:?}. See the log for details.",
            failed.len(),
            aligned.len() + failed.len()
        ))
    }
}
