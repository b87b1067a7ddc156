use cfc_core::{CfcError, ErrorInfo, Word};

/// Insertion-ordered collection of mutually comma-free words.
///
/// Accepted words are stored doubled so that every cyclic containment test
/// is a plain substring search. The dictionary grows monotonically within a
/// run; there is no removal and no persistence.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    word_len: usize,
    entries: Vec<Vec<u32>>,
}

impl Dictionary {
    /// Creates an empty dictionary for words of length `word_len`.
    pub fn new(word_len: usize) -> Result<Self, CfcError> {
        if word_len == 0 {
            let info = ErrorInfo::new("word-length-zero", "word length must be positive");
            return Err(CfcError::Config(info));
        }
        Ok(Self {
            word_len,
            entries: Vec::new(),
        })
    }

    /// Returns the configured word length.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Returns the number of accepted words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` while no word has been accepted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks `word` against the accepted set and appends it on success.
    ///
    /// The candidate is rejected with `Word` on a length mismatch, with
    /// `Cyclic` when it is a nontrivial rotation of itself, and with
    /// `Conflict` when it is a rotation or substring of an accepted word.
    /// With `strict` set, every boundary of the would-be set is verified as
    /// well, so that acceptance guarantees the whole set remains comma-free;
    /// this costs a quadratic scan over the accepted words. Rejection leaves
    /// the dictionary unchanged and the caller may continue with further
    /// candidates.
    pub fn add(&mut self, word: &Word, strict: bool) -> Result<(), CfcError> {
        let n = self.word_len;
        if word.len() != n {
            let info = ErrorInfo::new("word-length-mismatch", "candidate has the wrong length")
                .with_context("expected", n.to_string())
                .with_context("actual", word.len().to_string());
            return Err(CfcError::Word(info));
        }

        if !word.is_aperiodic() {
            let info = ErrorInfo::new("cyclic-candidate", "candidate equals one of its rotations")
                .with_context("word", word.to_string());
            return Err(CfcError::Cyclic(info));
        }

        for entry in &self.entries {
            if entry.windows(n).any(|window| window == word.symbols()) {
                let info = ErrorInfo::new(
                    "rotation-conflict",
                    "candidate occurs within an accepted word's cycle",
                )
                .with_context("word", word.to_string())
                .with_context("entry", render(&entry[..n]));
                return Err(CfcError::Conflict(info));
            }
        }

        if strict {
            self.verify_boundaries(word)?;
        }

        let mut doubled = Vec::with_capacity(n * 2);
        doubled.extend_from_slice(word.symbols());
        doubled.extend_from_slice(word.symbols());
        self.entries.push(doubled);
        Ok(())
    }

    /// Returns the accepted words, undoubled, in insertion order.
    pub fn list(&self) -> Vec<Word> {
        self.entries
            .iter()
            .map(|entry| Word::new(entry[..self.word_len].to_vec()))
            .collect()
    }

    /// Verifies every concatenation boundary of the would-be set.
    ///
    /// Let `S` be the accepted words plus the candidate. The set is
    /// comma-free iff no member of `S` occurs at a boundary-spanning offset
    /// of any ordered concatenation `a || b` with `a, b` in `S`. Boundaries
    /// between previously accepted pairs were verified by earlier calls for
    /// the old members, so the remaining obligations are the candidate
    /// against every pair and the old members against pairs that involve
    /// the candidate.
    fn verify_boundaries(&self, word: &Word) -> Result<(), CfcError> {
        let n = self.word_len;
        let cand = word.symbols();
        let accepted: Vec<&[u32]> = self.entries.iter().map(|entry| &entry[..n]).collect();

        let mut set: Vec<&[u32]> = accepted.clone();
        set.push(cand);

        for &left in &set {
            for &right in &set {
                if spans_boundary(left, right, cand) {
                    return Err(self.boundary_conflict(word, left, right, cand));
                }
            }
        }

        for &old in &accepted {
            for &other in &set {
                if spans_boundary(cand, other, old) {
                    return Err(self.boundary_conflict(word, cand, other, old));
                }
                if spans_boundary(other, cand, old) {
                    return Err(self.boundary_conflict(word, other, cand, old));
                }
            }
        }

        Ok(())
    }

    fn boundary_conflict(&self, word: &Word, left: &[u32], right: &[u32], inner: &[u32]) -> CfcError {
        let info = ErrorInfo::new(
            "boundary-conflict",
            "a set member straddles a concatenation boundary",
        )
        .with_context("word", word.to_string())
        .with_context("left", render(left))
        .with_context("right", render(right))
        .with_context("straddling", render(inner));
        CfcError::Conflict(info)
    }
}

/// Tests whether `inner` occurs in `left || right` across the boundary.
///
/// All three slices share one length `n`; the spanning offsets are `1..n`,
/// excluding the trivial positions fully inside either side.
fn spans_boundary(left: &[u32], right: &[u32], inner: &[u32]) -> bool {
    let n = inner.len();
    (1..n).any(|offset| {
        let head = n - offset;
        inner[..head] == left[offset..] && inner[head..] == right[..offset]
    })
}

fn render(symbols: &[u32]) -> String {
    Word::new(symbols.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(symbols: &[u32]) -> Word {
        Word::new(symbols.to_vec())
    }

    #[test]
    fn rejects_zero_word_length() {
        assert!(matches!(Dictionary::new(0), Err(CfcError::Config(_))));
    }

    #[test]
    fn rejects_length_mismatch() {
        let mut dict = Dictionary::new(3).unwrap();
        let err = dict.add(&word(&[0, 1]), false).unwrap_err();
        assert!(matches!(err, CfcError::Word(_)));
        assert_eq!(err.info().context["expected"], "3");
    }

    #[test]
    fn rejects_cyclic_candidate() {
        let mut dict = Dictionary::new(4).unwrap();
        let err = dict.add(&word(&[0, 1, 0, 1]), false).unwrap_err();
        assert!(matches!(err, CfcError::Cyclic(_)));
        assert!(dict.is_empty());
    }

    #[test]
    fn rejects_rotations_of_accepted_words() {
        let mut dict = Dictionary::new(3).unwrap();
        dict.add(&word(&[0, 0, 1]), false).unwrap();
        let err = dict.add(&word(&[0, 1, 0]), false).unwrap_err();
        assert!(matches!(err, CfcError::Conflict(_)));
        let err = dict.add(&word(&[0, 0, 1]), false).unwrap_err();
        assert!(matches!(err, CfcError::Conflict(_)));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn list_undoes_the_doubling() {
        let mut dict = Dictionary::new(3).unwrap();
        dict.add(&word(&[0, 0, 1]), true).unwrap();
        dict.add(&word(&[0, 1, 1]), true).unwrap();
        let words = dict.list();
        assert_eq!(words, vec![word(&[0, 0, 1]), word(&[0, 1, 1])]);
    }

    #[test]
    fn strict_rejects_candidate_spanning_a_pair_boundary() {
        // 1 2 0 || 2 1 1 contains 2 0 2 starting inside the first word.
        let mut dict = Dictionary::new(3).unwrap();
        dict.add(&word(&[1, 2, 0]), true).unwrap();
        dict.add(&word(&[2, 1, 1]), true).unwrap();
        let err = dict.add(&word(&[2, 0, 2]), true).unwrap_err();
        assert!(matches!(err, CfcError::Conflict(_)));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn strict_rejects_accepted_word_spanning_a_candidate_boundary() {
        // 0 0 1 straddles the boundary of 0 2 0 || 0 1 1, so accepting
        // 0 2 0 would break the set even though the candidate itself fits
        // every existing boundary.
        let mut dict = Dictionary::new(3).unwrap();
        dict.add(&word(&[0, 0, 1]), true).unwrap();
        dict.add(&word(&[0, 1, 1]), true).unwrap();
        let err = dict.add(&word(&[0, 2, 0]), true).unwrap_err();
        assert!(matches!(err, CfcError::Conflict(_)));

        let mut relaxed = Dictionary::new(3).unwrap();
        relaxed.add(&word(&[0, 0, 1]), false).unwrap();
        relaxed.add(&word(&[0, 1, 1]), false).unwrap();
        relaxed.add(&word(&[0, 2, 0]), false).unwrap();
        assert_eq!(relaxed.len(), 3);
    }

    #[test]
    fn spanning_check_ignores_trivial_offsets() {
        let a = [0, 0, 1];
        assert!(!spans_boundary(&a, &a, &a));
        assert!(spans_boundary(&[0, 2, 0], &[0, 1, 1], &[0, 0, 1]));
    }
}
