use std::error::Error;
use std::path::PathBuf;

use cfc_gen::NecklaceGenerator;
use clap::Args;

use crate::wordio;

#[derive(Args, Debug)]
pub struct PrimesArgs {
    /// Alphabet size; symbols run over [0, alphabet).
    #[arg(long)]
    pub alphabet: u32,
    /// Number of symbols per prime string.
    #[arg(long)]
    pub length: usize,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &PrimesArgs) -> Result<(), Box<dyn Error>> {
    let generator = NecklaceGenerator::new(args.alphabet, args.length)?;
    let lines: Vec<String> = generator.map(|word| word.to_string()).collect();
    wordio::write_lines(args.out.as_deref(), &lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unit_alphabet_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("primes.txt");
        let args = PrimesArgs {
            alphabet: 1,
            length: 4,
            out: Some(out.clone()),
        };
        assert!(run(&args).is_err());
        assert!(!out.exists());
    }
}
