use std::error::Error;
use std::path::PathBuf;

use cfc_core::{CfcError, Word};
use cfc_dict::Dictionary;
use cfc_gen::TupleEnumerator;
use clap::Args;
use serde::Serialize;

use crate::wordio::{self, LineMode};

#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Block length of the incoming class representatives.
    #[arg(long)]
    pub length: usize,
    /// Input file of representatives; stdin when omitted.
    #[arg(long = "in")]
    pub input: Option<PathBuf>,
    /// Optional JSON report path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RoutesReport {
    word_len: usize,
    classes: u64,
    total: u64,
    accepted: u64,
}

pub fn run(args: &RoutesArgs) -> Result<(), Box<dyn Error>> {
    if args.length == 0 {
        return Err("--length must be positive".into());
    }
    let lines = wordio::read_lines(args.input.as_deref())?;
    let mut words = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        match wordio::parse_line(line, args.length, LineMode::Integers) {
            Ok(word) => words.push(word),
            Err(reason) => eprintln!("line {}: skipped: {reason}", idx + 1),
        }
    }

    for word in &words {
        println!("{}", orbit_line(word));
    }

    let (total, accepted) = if words.is_empty() {
        (0, 0)
    } else {
        let mut total = 0u64;
        let mut accepted = 0u64;
        for (combination, ok) in survey(&words, args.length)? {
            println!("{combination} : {}", if ok { "ok" } else { "fail" });
            total += 1;
            if ok {
                accepted += 1;
            }
        }
        (total, accepted)
    };

    println!("accepted {accepted} of {total}");

    if let Some(path) = &args.report {
        let report = RoutesReport {
            word_len: args.length,
            classes: words.len() as u64,
            total,
            accepted,
        };
        wordio::write_json(path, &report)?;
    }
    Ok(())
}

/// Renders the full rotation orbit of one class representative.
fn orbit_line(word: &Word) -> String {
    (0..word.len())
        .map(|s| word.rotated_left(s).to_string())
        .collect::<Vec<_>>()
        .join("   ")
}

/// Drives every per-word rotation combination through a strict dictionary.
///
/// The odometer assigns each representative a shift in `[0, word_len)`; a
/// combination is accepted when every rotated word enters one fresh
/// dictionary under strict verification, i.e. when the rotations chosen
/// form a comma-free code.
fn survey(words: &[Word], word_len: usize) -> Result<Vec<(Word, bool)>, CfcError> {
    let maxima = vec![(word_len - 1) as u32; words.len()];
    let mut odometer = TupleEnumerator::new(maxima)?;
    let mut out = Vec::new();
    loop {
        let (combination, more) = odometer.next_tuple();
        let mut dict = Dictionary::new(word_len)?;
        let mut ok = true;
        for (word, &shift) in words.iter().zip(combination.symbols()) {
            match dict.add(&word.rotated_left(shift as usize), true) {
                Ok(()) => {}
                Err(CfcError::Cyclic(_) | CfcError::Conflict(_)) => {
                    ok = false;
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        out.push((combination, ok));
        if !more {
            break;
        }
    }
    Ok(out)
}
