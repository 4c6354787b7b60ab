//! Recomputing the scores of aligned pairs.

use std::path::Path;

use nw_align::{ScoringScheme, verify};

use crate::data::{self, ALIGNMENT_SCORE, SEQUENCES, Table};

/// Recomputes the `Alignment Score` of every row in `inp_path` and writes the rows to `out_path`.
///
/// Every other column is kept as it was. The score column is appended if the input has none. `inp_path` and `out_path` may be the same file.
///
/// Returns the number of rows whose score changed.
pub fn rescore_csv<P: AsRef<Path>>(scoring: &ScoringScheme<i64>, inp_path: P, out_path: P) -> Result<usize, String> {
    crate::utils::check_out_path(&out_path)?;

    let mut table = data::read_table(&inp_path)?;
    let changed = rescore(scoring, &mut table)?;
    ftlog::info!("Rescored {} rows, {changed} of which changed.", table.rows.len());
    data::write_table(&out_path, &table)?;

    Ok(changed)
}

/// Replaces the score in each row with the score of its aligned sequences.
///
/// Returns the number of rows whose score changed.
pub fn rescore(scoring: &ScoringScheme<i64>, table: &mut Table) -> Result<usize, String> {
    let sequences = table
        .column(SEQUENCES)
        .ok_or_else(|| format!("Missing the '{SEQUENCES}' column."))?;
    let column = table.column(ALIGNMENT_SCORE).unwrap_or_else(|| {
        table.headers.push_field(ALIGNMENT_SCORE);
        table.headers.len() - 1
    });

    let mut changed = 0;
    for (i, row) in table.rows.iter_mut().enumerate() {
        let cell = row.get(sequences).unwrap_or_default();
        let (a, b) = data::split_aligned(cell).map_err(|e| format!("Row {}: {e}", i + 1))?;
        let score = verify::score_alignment(a.as_bytes(), b.as_bytes(), scoring)
            .map_err(|e| format!("Row {}: {e}", i + 1))?
            .to_string();

        let mut fields = row.iter().map(str::to_string).collect::<Vec<_>>();
        if column < fields.len() {
            if fields[column] == score {
                continue;
            }
            fields[column] = score;
        } else {
            fields.push(score);
        }
        changed += 1;
        *row = csv::StringRecord::from(fields);
    }

    Ok(changed)
}
