use std::error::Error;
use std::path::PathBuf;

use cfc_gen::class_representatives;
use clap::Args;

use crate::wordio;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Inclusive per-position maximum; symbols run over [0, max].
    #[arg(long)]
    pub max: u32,
    /// Number of positions per word.
    #[arg(long)]
    pub length: usize,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let maxima = vec![args.max; args.length];
    let words = class_representatives(&maxima)?;
    let lines: Vec<String> = words.iter().map(ToString::to_string).collect();
    wordio::write_lines(args.out.as_deref(), &lines)
}
