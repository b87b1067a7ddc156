//! Incremental comma-free dictionary.
//!
//! The dictionary accepts or rejects candidate words of a fixed block
//! length against everything accepted so far. Rejections are per candidate;
//! callers keep the stream going. See [`Dictionary::add`] for the exact
//! check order and what the `strict` flag adds.

mod dictionary;
pub mod hash;

pub use dictionary::Dictionary;
pub use hash::word_set_hash;

impl Dictionary {
    /// Returns the canonical fingerprint of the accepted sequence.
    pub fn fingerprint(&self) -> String {
        word_set_hash(self.word_len(), &self.list())
    }
}
