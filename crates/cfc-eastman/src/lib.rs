//! Eastman's boundary-elimination shift selector.
//!
//! Given one aperiodic odd-length sequence, [`shift`] returns the left
//! rotation that turns it into Eastman's canonical representative. Across
//! inequivalent aperiodic classes of the same odd length, the words so
//! chosen form a comma-free code over an unbounded alphabet (Eastman's
//! theorem), which makes the selector a constructive companion to the
//! dictionary-based checkers.

mod selector;

pub use selector::shift;
