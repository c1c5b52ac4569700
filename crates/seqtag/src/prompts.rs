use std::fmt;
use std::io::{self, BufRead, Write};

use colored::*;
use log::debug;
use rand::Rng;

use st_sequence::random_identifier;

pub const LENGTH_PROMPT: &str = "Enter the sequence length: ";
pub const IDENTIFIER_PROMPT: &str = "Enter the sequence ID (leave empty to generate one): ";
pub const DESCRIPTION_PROMPT: &str = "Enter the sequence description: ";
pub const NAME_PROMPT: &str = "Enter your name: ";


/// Why a length answer was rejected. Both cases are recoverable.
#[derive(Debug, PartialEq, Eq)]
pub enum LengthError {
    NotInteger(String),
    NotPositive(i64),
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthError::NotInteger(_) => {
                write!(f, "Error: the length must be an integer!")
            }
            LengthError::NotPositive(_) => {
                write!(f, "The length cannot be negative or zero. Try again.")
            }
        }
    }
}

impl std::error::Error for LengthError {}

/// Accepts optional surrounding whitespace and an explicit sign.
pub fn parse_length(s: &str) -> Result<usize, LengthError> {
    let n: i64 = s.trim()
        .parse()
        .map_err(|_| LengthError::NotInteger(s.to_string()))?;
    if n < 1 {
        return Err(LengthError::NotPositive(n));
    }
    usize::try_from(n).map_err(|_| LengthError::NotInteger(s.to_string()))
}


/// Print `prompt` and read one line, without its line terminator.
/// A closed input is reported as `UnexpectedEof`.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed while waiting for an answer"));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Ask for the sequence length until a positive integer is given.
pub fn read_length<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<usize> {
    loop {
        let answer = prompt_line(input, output, LENGTH_PROMPT)?;
        match parse_length(&answer) {
            Ok(n) => return Ok(n),
            Err(e) => {
                debug!("Rejected length {:?}", e);
                writeln!(output, "{}", e.to_string().yellow())?;
            }
        }
    }
}

/// Ask for an identifier. Blank answers are replaced by a random one,
/// which is reported to the user. The flag tells whether it was generated.
pub fn read_identifier<R: BufRead, W: Write, G: Rng + ?Sized>(
    input: &mut R,
    output: &mut W,
    rng: &mut G,
    generated_length: usize,
) -> io::Result<(String, bool)> {
    let answer = prompt_line(input, output, IDENTIFIER_PROMPT)?;
    if !answer.trim().is_empty() {
        return Ok((answer, false));
    }
    let id = random_identifier(generated_length, rng);
    writeln!(output, "Generated random ID: {}", id.cyan())?;
    Ok((id, true))
}
