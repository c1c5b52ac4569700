//! # seqtag
//!
//! Interactive generation of a random DNA sequence carrying a name, its
//! FASTA record and a composition chart.
//!
//! This crate re-exports the sequence and plotting crates it is built on.

pub mod prompts;
pub mod session;

pub mod sequence {
    pub use ::st_sequence::*;
}

pub mod plotting {
    pub use ::st_plotting::*;
}
