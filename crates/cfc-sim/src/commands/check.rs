use std::error::Error;
use std::path::PathBuf;

use cfc_core::CfcError;
use cfc_dict::Dictionary;
use clap::Args;
use serde::Serialize;

use crate::wordio::{self, LineMode};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Block length shared by every candidate word.
    #[arg(long)]
    pub word_len: usize,
    /// Verify every concatenation boundary of the would-be set.
    #[arg(long)]
    pub strict: bool,
    /// Read candidates as single characters instead of integers.
    #[arg(long)]
    pub letters: bool,
    /// Input file; stdin when omitted.
    #[arg(long = "in")]
    pub input: Option<PathBuf>,
    /// Optional JSON report path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    word_len: usize,
    strict: bool,
    total: u64,
    accepted: u64,
    fingerprint: String,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let mut dict = Dictionary::new(args.word_len)?;
    let mode = if args.letters {
        LineMode::Letters
    } else {
        LineMode::Integers
    };
    let lines = wordio::read_lines(args.input.as_deref())?;

    let mut total = 0u64;
    let mut accepted = 0u64;
    for (idx, line) in lines.iter().enumerate() {
        let word = match wordio::parse_line(line, args.word_len, mode) {
            Ok(word) => word,
            Err(reason) => {
                eprintln!("line {}: skipped: {reason}", idx + 1);
                continue;
            }
        };
        total += 1;
        // rejections are per candidate; the stream keeps going
        match dict.add(&word, args.strict) {
            Ok(()) => {
                accepted += 1;
                println!("{word}: ok");
            }
            Err(CfcError::Cyclic(_)) => println!("{word}: rejected: cyclic"),
            Err(CfcError::Conflict(_)) => println!("{word}: rejected: conflict"),
            Err(err) => return Err(err.into()),
        }
    }

    println!("accepted {accepted} of {total}");

    if let Some(path) = &args.report {
        let report = CheckReport {
            word_len: args.word_len,
            strict: args.strict,
            total,
            accepted,
            fingerprint: dict.fingerprint(),
        };
        wordio::write_json(path, &report)?;
    }
    Ok(())
}
