//! Global pairwise sequence alignment with the Needleman-Wunsch algorithm.
//!
//! Given two sequences over a small alphabet and a dense [`ScoringScheme`], the [`Aligner`] fills an [`AlignmentMatrix`] of best prefix scores and
//! traceback [`Direction`]s, and then walks that matrix back from the last cell to produce one optimal [`AlignedPair`].
//!
//! ## Example
//!
//! ```rust
//! use nw_align::{Aligner, ScoringScheme};
//!
//! let scoring = ScoringScheme::<i32>::unit_dna();
//! let aligner = Aligner::new(&scoring);
//!
//! let aligned = aligner.align(b"AC", b"AG")?;
//! assert_eq!(aligned.aligned_v(), b"AC");
//! assert_eq!(aligned.aligned_w(), b"AG");
//! assert_eq!(aligned.score(), 0);
//! # Ok::<(), nw_align::AlignError>(())
//! ```
//!
//! ## Modules
//!
//! - [`scoring`]: The dense scoring scheme over an alphabet and a gap symbol.
//! - [`alignment`]: The DP matrix, traceback directions, and the aligned pair.
//! - [`aligner`]: Filling the matrix, sequentially or along anti-diagonals, and batch alignment.
//! - [`verify`]: Re-scoring aligned pairs and comparing result sets from different aligners.
//! - [`normalize`]: Cleaning raw input sequences before alignment.

pub mod aligner;
pub mod alignment;
mod errors;
pub mod normalize;
pub mod scoring;
mod utils;
pub mod verify;

pub use aligner::{Aligner, DEFAULT_MAX_CELLS, TieBreak, reconstruct};
pub use alignment::{AlignedPair, AlignmentMatrix, Direction};
pub use errors::AlignError;
pub use scoring::ScoringScheme;
pub use utils::ScoreValue;
