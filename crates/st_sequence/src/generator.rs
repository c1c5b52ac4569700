use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::nucleotides::Base;
use crate::nucleotides::SequenceError;

/// Symbols used for generated identifiers.
pub const IDENTIFIER_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of a generated identifier.
pub const IDENTIFIER_LENGTH: usize = 8;

/// Draw `length` bases uniformly (with replacement) from A, C, G, T.
pub fn random_sequence<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<String, SequenceError> {
    if length == 0 {
        return Err(SequenceError::ZeroLength);
    }
    let seq: String = (0..length)
        .map(|_| Base::ALL[rng.random_range(0..Base::ALL.len())].symbol())
        .collect();
    debug!("Generated random sequence of length {}", length);
    Ok(seq)
}

/// Random lowercase-alphanumeric token, used when no identifier is given.
pub fn random_identifier<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .filter_map(|_| IDENTIFIER_ALPHABET.choose(rng))
        .map(|&b| b as char)
        .collect()
}
