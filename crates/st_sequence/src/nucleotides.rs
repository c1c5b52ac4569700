
use std::fmt;


#[derive(Debug, PartialEq, Eq)]
pub enum SequenceError {
    InvalidChar(char),
    ZeroLength,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidChar(c) => {
                write!(f, "Unsupported nucleotide: '{}'", c)
            }
            SequenceError::ZeroLength => {
                write!(f, "Sequence length must be at least 1")
            }
        }
    }
}

impl std::error::Error for SequenceError {}


/// The four DNA bases. The discriminants index count tables.
#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Base { A, C, G, T }
pub const BCOUNT: usize = 4; // 4 Base variants for tables.

impl Base {
    /// All bases in the order they are reported and plotted.
    pub const ALL: [Base; BCOUNT] = [Base::A, Base::C, Base::G, Base::T];

    pub fn symbol(&self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, Base::C | Base::G)
    }
}

/// Strict conversion: only the uppercase symbols belong to the alphabet.
/// Lowercase letters are treated as foreign text (e.g. an embedded name).
impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' => Ok(Base::T),
            _ => Err(SequenceError::InvalidChar(c)),
        }
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        b.symbol()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Iterate over the alphabet-only subset of `s`.
pub fn alphabet_only(s: &str) -> impl Iterator<Item = Base> + '_ {
    s.chars().filter_map(|c| Base::try_from(c).ok())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_char() {
        assert_eq!(Base::try_from('A').unwrap(), Base::A);
        assert_eq!(Base::try_from('C').unwrap(), Base::C);
        assert_eq!(Base::try_from('G').unwrap(), Base::G);
        assert_eq!(Base::try_from('T').unwrap(), Base::T);
    }

    #[test]
    fn test_base_rejects_lowercase_and_rna() {
        assert_eq!(Base::try_from('a'), Err(SequenceError::InvalidChar('a')));
        assert_eq!(Base::try_from('U'), Err(SequenceError::InvalidChar('U')));
        assert_eq!(Base::try_from('N'), Err(SequenceError::InvalidChar('N')));
    }

    #[test]
    fn test_base_roundtrip_display() {
        let s: String = Base::ALL.iter().map(|b| b.to_string()).collect();
        assert_eq!(s, "ACGT");
        assert_eq!(char::from(Base::G), 'G');
    }

    #[test]
    fn test_alphabet_only_skips_foreign_text() {
        let bases: Vec<Base> = alphabet_only("AxCname3Gé T").collect();
        assert_eq!(bases, vec![Base::A, Base::C, Base::G, Base::T]);
        assert_eq!(alphabet_only("xyz").count(), 0);
    }

    #[test]
    fn test_strong_bases() {
        assert!(Base::C.is_strong());
        assert!(Base::G.is_strong());
        assert!(!Base::A.is_strong());
        assert!(!Base::T.is_strong());
    }
}
