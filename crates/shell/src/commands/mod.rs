//! The commands under the `nw-shell` CLI.

pub mod align;
pub mod compare;
pub mod rescore;

use std::path::PathBuf;

use clap::Subcommand;
use nw_align::TieBreak;

/// The subcommands of `nw-shell`.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Globally align every pair of sequences in a CSV file and write the aligned pairs with their scores.
    Align {
        /// The CSV file with `sequence1` and `sequence2` columns.
        #[arg(short('i'), long)]
        inp_path: PathBuf,
        /// The CSV file to write the alignments to.
        #[arg(short('o'), long)]
        out_path: PathBuf,
        /// The order in which equally good moves are preferred, e.g. `left-up-diagonal`.
        #[arg(short('t'), long, default_value_t = TieBreak::LEFT_UP_DIAGONAL)]
        tie_break: TieBreak,
        /// Whether to align the pairs in parallel.
        #[arg(short('p'), long, default_value_t = false)]
        parallel: bool,
        /// Whether to upper-case the sequences before aligning.
        #[arg(short('u'), long, default_value_t = false)]
        uppercase: bool,
        /// Whether to drop symbols outside the alphabet before aligning.
        #[arg(short('k'), long, default_value_t = false)]
        clean: bool,
    },
    /// Recompute the `Alignment Score` column from the `Sequences` column.
    Rescore {
        /// The CSV file of aligned pairs.
        #[arg(short('i'), long)]
        inp_path: PathBuf,
        /// The CSV file to write the rescored pairs to.
        #[arg(short('o'), long)]
        out_path: PathBuf,
    },
    /// Compare two CSV files of aligned pairs row by row.
    Compare {
        /// The first CSV file of aligned pairs.
        #[arg(short('i'), long)]
        first: PathBuf,
        /// The second CSV file of aligned pairs.
        #[arg(short('j'), long)]
        second: PathBuf,
        /// What must agree for two rows to match.
        #[arg(short('b'), long, default_value_t = compare::CompareBy::Strings)]
        by: compare::CompareBy,
    },
}
