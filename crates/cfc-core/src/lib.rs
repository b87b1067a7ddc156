#![deny(missing_docs)]
#![doc = "Core types and errors for the comma-free code workbench."]

pub mod errors;
pub mod rng;
mod word;

pub use errors::{CfcError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};
pub use word::Word;
