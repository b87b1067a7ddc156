//! Line-oriented word input and output shared by the subcommands.

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use cfc_core::Word;

/// How one text line encodes one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// Whitespace-separated non-negative integers.
    Integers,
    /// Single characters, each treated as its integer code.
    Letters,
}

/// Parses one line into a word, or explains why it cannot be one.
pub fn parse_line(line: &str, word_len: usize, mode: LineMode) -> Result<Word, String> {
    let symbols: Vec<u32> = match mode {
        LineMode::Integers => line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|_| format!("`{token}` is not a non-negative integer"))
            })
            .collect::<Result<_, _>>()?,
        LineMode::Letters => line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c as u32)
            .collect(),
    };
    if symbols.len() != word_len {
        return Err(format!(
            "expected {word_len} symbols, found {}",
            symbols.len()
        ));
    }
    Ok(Word::new(symbols))
}

/// Reads every line from the path, or from stdin when no path is given.
pub fn read_lines(input: Option<&Path>) -> Result<Vec<String>, Box<dyn Error>> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(text.lines().map(str::to_string).collect())
}

/// Writes the lines to the path, or to stdout when no path is given.
pub fn write_lines(out: Option<&Path>, lines: &[String]) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            for line in lines {
                writeln!(file, "{line}")?;
            }
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            for line in lines {
                writeln!(lock, "{line}")?;
            }
        }
    }
    Ok(())
}

/// Serializes a report value as pretty JSON.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
