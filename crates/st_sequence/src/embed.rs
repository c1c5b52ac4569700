use rand::Rng;

/// A sequence with a name spliced in at `offset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Embedding {
    /// Position in the original sequence, counted in characters.
    pub offset: usize,
    /// The annotated sequence.
    pub text: String,
}

/// Byte positions of every character boundary, including the end.
fn boundaries(s: &str) -> Vec<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect()
}

fn splice(seq: &str, name: &str, offset: usize, split: usize) -> Embedding {
    let (prefix, suffix) = seq.split_at(split);
    let mut text = String::with_capacity(seq.len() + name.len());
    text.push_str(prefix);
    text.push_str(name);
    text.push_str(suffix);
    Embedding { offset, text }
}

impl Embedding {
    /// Splice `name` into `seq` at a fixed character offset.
    /// Returns `None` if `offset` lies past the end of `seq`.
    pub fn at(seq: &str, name: &str, offset: usize) -> Option<Self> {
        let split = *boundaries(seq).get(offset)?;
        Some(splice(seq, name, offset, split))
    }

    /// Undo the splice, given the embedded name.
    pub fn strip(&self, name: &str) -> Option<String> {
        let split = *boundaries(&self.text).get(self.offset)?;
        let rest = self.text[split..].strip_prefix(name)?;
        Some(format!("{}{}", &self.text[..split], rest))
    }
}

/// Insert `name` at an offset drawn uniformly from `0..=len(seq)`.
pub fn embed_name<R: Rng + ?Sized>(seq: &str, name: &str, rng: &mut R) -> Embedding {
    let bounds = boundaries(seq);
    let offset = rng.random_range(0..bounds.len());
    splice(seq, name, offset, bounds[offset])
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_embedding_at_fixed_offsets() {
        assert_eq!(Embedding::at("ACGT", "bob", 0).unwrap().text, "bobACGT");
        assert_eq!(Embedding::at("ACGT", "bob", 2).unwrap().text, "ACbobGT");
        assert_eq!(Embedding::at("ACGT", "bob", 4).unwrap().text, "ACGTbob");
    }

    #[test]
    fn test_embed_name_preserves_sequence() {
        let mut rng = StdRng::seed_from_u64(11);
        let seq = "ACGTTGCAACGT";
        for name in ["", "x", "Anna", "Zoë Ł", "ACGT"] {
            let e = embed_name(seq, name, &mut rng);
            assert!(e.offset <= seq.len());
            assert_eq!(e.text.chars().count(), seq.chars().count() + name.chars().count());
            assert_eq!(e.strip(name).as_deref(), Some(seq));
        }
    }

    #[test]
    fn test_embed_empty_name_is_identity() {
        let mut rng = StdRng::seed_from_u64(5);
        let e = embed_name("GATTACA", "", &mut rng);
        assert_eq!(e.text, "GATTACA");
    }

    #[test]
    fn test_embed_reaches_both_ends() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let e = embed_name("AC", "n", &mut rng);
            seen[e.offset] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_embed_into_empty_sequence() {
        let mut rng = StdRng::seed_from_u64(0);
        let e = embed_name("", "name", &mut rng);
        assert_eq!(e.offset, 0);
        assert_eq!(e.text, "name");
    }

    #[test]
    fn test_strip_rejects_wrong_name() {
        let e = Embedding::at("ACGT", "bob", 1).unwrap();
        assert_eq!(e.strip("alice"), None);
        assert_eq!(Embedding::at("ACGT", "bob", 5), None);
    }
}
