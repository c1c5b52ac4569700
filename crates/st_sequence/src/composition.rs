use std::fmt;
use std::ops::Index;

use crate::nucleotides::Base;
use crate::nucleotides::BCOUNT;
use crate::nucleotides::alphabet_only;

/// Raw occurrence counts of each base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseCounts([usize; BCOUNT]);

impl BaseCounts {
    pub fn of(s: &str) -> Self {
        let mut counts = [0; BCOUNT];
        for b in alphabet_only(s) {
            counts[b as usize] += 1;
        }
        BaseCounts(counts)
    }

    /// Size of the alphabet-only subset.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Occurrences of C and G.
    pub fn strong(&self) -> usize {
        Base::ALL.iter()
            .filter(|b| b.is_strong())
            .map(|&b| self[b])
            .sum()
    }
}

impl Index<Base> for BaseCounts {
    type Output = usize;
    fn index(&self, b: Base) -> &usize {
        &self.0[b as usize]
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

/// Base percentages within the alphabet-only subset, plus the CG share.
///
/// Characters outside {A, C, G, T} count neither in the numerator nor in
/// the denominator. Everything is zero when no alphabet symbol is present.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composition {
    counts: BaseCounts,
    percentages: [f64; BCOUNT],
    cg: f64,
}

impl Composition {
    pub fn of(s: &str) -> Self {
        Self::from(BaseCounts::of(s))
    }

    pub fn counts(&self) -> &BaseCounts {
        &self.counts
    }

    pub fn percent(&self, b: Base) -> f64 {
        self.percentages[b as usize]
    }

    /// Percentages in A, C, G, T order.
    pub fn percentages(&self) -> [f64; BCOUNT] {
        self.percentages
    }

    pub fn cg_percent(&self) -> f64 {
        self.cg
    }
}

impl From<BaseCounts> for Composition {
    fn from(counts: BaseCounts) -> Self {
        let total = counts.total();
        let percentages = Base::ALL.map(|b| percent(counts[b], total));
        Composition {
            counts,
            percentages,
            cg: percent(counts.strong(), total),
        }
    }
}

/// One line per base, then the CG share.
impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in Base::ALL {
            writeln!(f, "{}: {:.1}%", b, self.percent(b))?;
        }
        write!(f, "%CG: {:.1}", self.cg)
    }
}
