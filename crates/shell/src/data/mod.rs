//! CSV records read and written by the CLI.

use std::path::Path;

use nw_align::AlignedPair;

/// A pair of sequences to align.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct PairRecord {
    /// Optional name of the first sequence.
    #[serde(default)]
    pub id1: Option<String>,
    /// The first sequence.
    pub sequence1: String,
    /// Optional name of the second sequence.
    #[serde(default)]
    pub id2: Option<String>,
    /// The second sequence.
    pub sequence2: String,
}

/// An aligned pair of sequences along with its score.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ResultRecord {
    /// Optional name of the first sequence.
    #[serde(default)]
    pub id1: Option<String>,
    /// Optional name of the second sequence.
    #[serde(default)]
    pub id2: Option<String>,
    /// The first sequence, as it was aligned.
    #[serde(default)]
    pub sequence1: String,
    /// The second sequence, as it was aligned.
    #[serde(default)]
    pub sequence2: String,
    /// The two aligned sequences, separated by a single space.
    #[serde(rename = "Sequences")]
    pub sequences: String,
    /// The score of the alignment.
    #[serde(rename = "Alignment Score", default)]
    pub score: Option<i64>,
}

impl ResultRecord {
    /// Creates a record for the alignment of the sequences in `pair`.
    pub fn new(pair: PairRecord, aligned: &AlignedPair<i64>) -> Self {
        let sequences = format!(
            "{} {}",
            String::from_utf8_lossy(aligned.aligned_v()),
            String::from_utf8_lossy(aligned.aligned_w())
        );
        Self {
            id1: pair.id1,
            id2: pair.id2,
            sequence1: pair.sequence1,
            sequence2: pair.sequence2,
            sequences,
            score: Some(aligned.score()),
        }
    }

    /// Splits the `Sequences` column into the two aligned sequences.
    pub fn aligned(&self) -> Result<(&str, &str), String> {
        split_aligned(&self.sequences)
    }
}

/// The name of the column holding the two aligned sequences.
pub const SEQUENCES: &str = "Sequences";

/// The name of the column holding the score of an alignment.
pub const ALIGNMENT_SCORE: &str = "Alignment Score";

/// Splits a `Sequences` cell into the two aligned sequences.
///
/// The sequences may be separated by any run of whitespace. A blank cell is the alignment of two empty sequences.
pub fn split_aligned(sequences: &str) -> Result<(&str, &str), String> {
    let mut parts = sequences.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (None, _, _) => Ok(("", "")),
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(format!("Expected two aligned sequences separated by whitespace, found {sequences:?}")),
    }
}

/// A CSV file with its header row, kept column for column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The names of the columns.
    pub headers: csv::StringRecord,
    /// The rows, each with one field per column.
    pub rows: Vec<csv::StringRecord>,
}

impl Table {
    /// The index of the column with the given name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Reads a CSV file with headers without interpreting its columns.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table, String> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| format!("Failed to open {path:?}: {e}"))?;
    let headers = reader.headers().map_err(|e| format!("Failed to read the headers of {path:?}: {e}"))?.clone();
    let rows = reader
        .records()
        .enumerate()
        .map(|(i, r)| r.map_err(|e| format!("Malformed row {} in {path:?}: {e}", i + 1)))
        .collect::<Result<Vec<_>, _>>()?;
    ftlog::info!("Read {} rows with {} columns from {path:?}", rows.len(), headers.len());
    Ok(Table { headers, rows })
}

/// Writes a CSV file with its header row.
pub fn write_table<P: AsRef<Path>>(path: P, table: &Table) -> Result<(), String> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|e| format!("Failed to create {path:?}: {e}"))?;
    writer.write_record(&table.headers).map_err(|e| e.to_string())?;
    for row in &table.rows {
        writer.write_record(row).map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())?;
    ftlog::info!("Wrote {} rows to {path:?}", table.rows.len());
    Ok(())
}

/// Reads the pairs of sequences from a CSV file.
pub fn read_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<PairRecord>, String> {
    read_records(path)
}

/// Reads the aligned pairs from a CSV file.
pub fn read_results<P: AsRef<Path>>(path: P) -> Result<Vec<ResultRecord>, String> {
    read_records(path)
}

/// Writes the aligned pairs to a CSV file.
pub fn write_results<P: AsRef<Path>>(path: P, records: &[ResultRecord]) -> Result<(), String> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|e| format!("Failed to create {path:?}: {e}"))?;
    for record in records {
        writer.serialize(record).map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())?;
    ftlog::info!("Wrote {} rows to {path:?}", records.len());
    Ok(())
}

/// Reads every row of a CSV file with headers into `R`.
fn read_records<R: serde::de::DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<R>, String> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| format!("Failed to open {path:?}: {e}"))?;
    let records = reader
        .deserialize()
        .enumerate()
        .map(|(i, r)| r.map_err(|e| format!("Malformed row {} in {path:?}: {e}", i + 1)))
        .collect::<Result<Vec<R>, _>>()?;
    ftlog::info!("Read {} rows from {path:?}", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use nw_align::AlignedPair;

    use test_case::test_case;

    use super::{PairRecord, ResultRecord, read_pairs, read_results, read_table, split_aligned, write_results, write_table};

    #[test]
    fn pairs_without_ids() -> Result<(), String> {
        let dir = tempdir::TempDir::new("nw-shell-data").map_err(|e| e.to_string())?;
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "sequence1,sequence2\nAC,AG\nGATTACA,\n").map_err(|e| e.to_string())?;

        let pairs = read_pairs(&path)?;
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].id1, None);
        assert_eq!(pairs[0].sequence1, "AC");
        assert_eq!(pairs[1].sequence2, "");

        Ok(())
    }

    #[test]
    fn results_round_trip() -> Result<(), String> {
        let dir = tempdir::TempDir::new("nw-shell-data").map_err(|e| e.to_string())?;
        let path = dir.path().join("results.csv");

        let pair = PairRecord {
            id1: Some("x".to_string()),
            sequence1: "AT".to_string(),
            id2: Some("y".to_string()),
            sequence2: "TA".to_string(),
        };
        let aligned = AlignedPair::new(b"AT-".to_vec(), b"-TA".to_vec(), b'-', -1).map_err(|e| e.to_string())?;
        let record = ResultRecord::new(pair, &aligned);
        assert_eq!(record.sequences, "AT- -TA");
        assert_eq!(record.aligned()?, ("AT-", "-TA"));

        write_results(&path, std::slice::from_ref(&record))?;
        let contents = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
        assert!(contents.starts_with("id1,id2,sequence1,sequence2,Sequences,Alignment Score\n"), "{contents}");

        assert_eq!(read_results(&path)?, vec![record]);

        Ok(())
    }

    #[test]
    fn malformed_row() -> Result<(), String> {
        let dir = tempdir::TempDir::new("nw-shell-data").map_err(|e| e.to_string())?;
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "Sequences,Alignment Score\nAC AG,zero\n").map_err(|e| e.to_string())?;

        let err = read_results(&path).err().unwrap_or_default();
        assert!(err.starts_with("Malformed row 1"), "{err}");

        Ok(())
    }

    #[test_case("AT- -TA", ("AT-", "-TA") ; "single space")]
    #[test_case("AT-   -TA", ("AT-", "-TA") ; "repeated spaces")]
    #[test_case(" AT-\t-TA ", ("AT-", "-TA") ; "surrounding whitespace")]
    #[test_case(" ", ("", "") ; "empty alignment")]
    fn split(sequences: &str, expected: (&str, &str)) -> Result<(), String> {
        assert_eq!(split_aligned(sequences)?, expected);
        Ok(())
    }

    #[test_case("AT-" ; "one part")]
    #[test_case("AT- -TA --" ; "three parts")]
    fn split_errors(sequences: &str) {
        assert!(split_aligned(sequences).is_err());
    }

    #[test]
    fn table_round_trip() -> Result<(), String> {
        let dir = tempdir::TempDir::new("nw-shell-data").map_err(|e| e.to_string())?;
        let path = dir.path().join("table.csv");
        let contents = "Method,Sequences,Notes\nhirschberg,AC AG,\"a, b\"\n";
        std::fs::write(&path, contents).map_err(|e| e.to_string())?;

        let table = read_table(&path)?;
        assert_eq!(table.column("Sequences"), Some(1));
        assert_eq!(table.column("Alignment Score"), None);
        assert_eq!(table.rows[0].get(2), Some("a, b"));

        write_table(&path, &table)?;
        assert_eq!(std::fs::read_to_string(&path).map_err(|e| e.to_string())?, contents);

        Ok(())
    }
}
