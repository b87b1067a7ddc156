use std::error::Error;

use clap::Args;

#[derive(Args, Debug)]
pub struct EastmanArgs {
    /// One full period of the cyclic word: an odd count of non-negative
    /// integers.
    #[arg(required = true, value_name = "SYMBOL")]
    pub sequence: Vec<u32>,
}

pub fn run(args: &EastmanArgs) -> Result<(), Box<dyn Error>> {
    // A cyclic input is a hard error for the whole invocation; no default
    // shift is ever substituted.
    let shift = cfc_eastman::shift(&args.sequence)?;
    println!("required shift: {shift}");
    Ok(())
}
