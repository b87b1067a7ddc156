use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    check::{self, CheckArgs},
    eastman::{self, EastmanArgs},
    generate::{self, GenerateArgs},
    primes::{self, PrimesArgs},
    routes::{self, RoutesArgs},
};

mod commands;
mod wordio;

#[derive(Parser, Debug)]
#[command(name = "cfc", about = "Comma-free code workbench CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Brute-force the minimal representative of every aperiodic class.
    Generate(GenerateArgs),
    /// Stream prime strings over a uniform alphabet.
    Primes(PrimesArgs),
    /// Check a stream of candidate words against one growing dictionary.
    Check(CheckArgs),
    /// Survey all rotation combinations of a set of class representatives.
    Routes(RoutesArgs),
    /// Select the comma-free shift of one odd-length sequence.
    Eastman(EastmanArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Primes(args) => primes::run(&args),
        Command::Check(args) => check::run(&args),
        Command::Routes(args) => routes::run(&args),
        Command::Eastman(args) => eastman::run(&args),
    }
}
