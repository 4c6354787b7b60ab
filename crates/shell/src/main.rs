//! CLI for global pairwise alignment of sequences with Needleman-Wunsch.

mod commands;
pub mod data;
pub mod scoring;
pub mod utils;

use std::path::PathBuf;

use clap::Parser;
use nw_align::{Aligner, DEFAULT_MAX_CELLS};

use commands::Commands;

use crate::scoring::ShellScoring;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The name of the log-file to use.
    #[arg(short('l'), long, default_value = "nw-shell.log")]
    log_name: String,

    /// The built-in scoring scheme to use.
    #[arg(short('c'), long, default_value_t = ShellScoring::Unit)]
    scoring: ShellScoring,

    /// Optional path to a `.json` or `.yaml` scoring scheme. Overrides the built-in scheme.
    #[arg(short('f'), long)]
    scoring_file: Option<PathBuf>,

    /// The largest number of cells an alignment matrix may have.
    #[arg(short('x'), long, default_value_t = DEFAULT_MAX_CELLS)]
    max_cells: usize,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name)?;
    ftlog::info!("Log file: {log_path:?}");

    let scoring = match &args.scoring_file {
        Some(path) => {
            ftlog::info!("Reading scoring scheme from {path:?}");
            scoring::read(path)?
        }
        None => {
            ftlog::info!("Using the {} scoring scheme", args.scoring);
            args.scoring.get()
        }
    };
    let aligner = Aligner::new(&scoring).with_max_cells(args.max_cells);

    match args.command {
        Commands::Align {
            inp_path,
            out_path,
            tie_break,
            parallel,
            uppercase,
            clean,
        } => {
            let normalization = commands::align::Normalization { uppercase, clean };
            let aligner = aligner.with_tie_break(tie_break);
            let n = commands::align::align_csv(&aligner, &inp_path, &out_path, normalization, parallel)?;
            println!("Aligned {n} pairs. Results written to {out_path:?}.");
        }
        Commands::Rescore { inp_path, out_path } => {
            let changed = commands::rescore::rescore_csv(&scoring, &inp_path, &out_path)?;
            println!("{changed} scores changed. Results written to {out_path:?}.");
        }
        Commands::Compare { first, second, by } => {
            let comparison = commands::compare::compare_csv(&first, &second, by, &scoring)?;
            println!("{comparison}");
        }
    }

    Ok(())
}
