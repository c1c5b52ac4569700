//! # st_sequence
//!
//! Random DNA sequences with an embedded name token, their base
//! composition, and the FASTA-style record they are stored in.

/// Base, SequenceError, alphabet filtering.
mod nucleotides;

/// Random sequences and identifiers.
mod generator;

/// Splicing a name into a sequence.
mod embed;

/// Per-base percentages and the CG share.
mod composition;

/// Writing and reading `>id description` records.
mod record;

pub use nucleotides::*;
pub use generator::*;
pub use embed::*;
pub use composition::*;
pub use record::*;
