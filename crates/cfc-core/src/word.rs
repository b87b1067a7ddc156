use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Fixed-length sequence of symbols, the unit handled by every engine.
///
/// Symbols are non-negative integers. Which range they are drawn from is an
/// engine-level convention: the necklace generator works over the exclusive
/// alphabet `[0, alphabet_size)`, the tuple odometer over inclusive
/// per-position maxima `[0, max_i]`. A word is immutable once built;
/// rotation produces a new word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(Vec<u32>);

impl Word {
    /// Wraps the given symbols as a word.
    pub fn new(symbols: Vec<u32>) -> Self {
        Self(symbols)
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the symbols as a slice.
    pub fn symbols(&self) -> &[u32] {
        &self.0
    }

    /// Returns the word concatenated with itself.
    ///
    /// The doubled form lets cyclic containment be tested with plain
    /// substring search instead of modular indexing.
    pub fn doubled(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.0.len() * 2);
        out.extend_from_slice(&self.0);
        out.extend_from_slice(&self.0);
        out
    }

    /// Returns the word rotated left by `shift` positions.
    pub fn rotated_left(&self, shift: usize) -> Self {
        let mut symbols = self.0.clone();
        if !symbols.is_empty() {
            symbols.rotate_left(shift % self.0.len());
        }
        Self(symbols)
    }

    /// Returns `true` when no nontrivial rotation reproduces the word.
    ///
    /// Periodic words (for example `0 1 0 1`) collapse to fewer than `len`
    /// distinct rotations and cannot seed a comma-free code.
    pub fn is_aperiodic(&self) -> bool {
        let n = self.0.len();
        if n == 0 {
            return false;
        }
        let doubled = self.doubled();
        (1..n).all(|offset| doubled[offset..offset + n] != self.0[..])
    }

    /// Consumes the word and returns its symbols.
    pub fn into_symbols(self) -> Vec<u32> {
        self.0
    }
}

impl From<Vec<u32>> for Word {
    fn from(symbols: Vec<u32>) -> Self {
        Self::new(symbols)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, symbol) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
