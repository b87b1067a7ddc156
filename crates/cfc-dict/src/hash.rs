use cfc_core::Word;
use sha2::{Digest, Sha256};

/// Computes the canonical SHA-256 fingerprint of a word sequence.
///
/// The encoding is the word length, the word count, then every symbol of
/// every word in order, each framed as a little-endian `u64`. Two runs that
/// accept the same words in the same order therefore agree on the digest,
/// which makes the fingerprint usable as a regression oracle.
pub fn word_set_hash(word_len: usize, words: &[Word]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((word_len as u64).to_le_bytes());
    hasher.update((words.len() as u64).to_le_bytes());
    for word in words {
        for &symbol in word.symbols() {
            hasher.update(u64::from(symbol).to_le_bytes());
        }
    }
    hex::encode(hasher.finalize())
}
