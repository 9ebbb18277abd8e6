use clap::{Parser, Subcommand};
use std::path::PathBuf;

use biosynth_seq::{DnaSequence, RnaSequence, SimulationConfig};

#[derive(Debug, Parser)]
#[command(name = "biosynth", about = "Turn text into DNA, mutate it, and translate it to protein", version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'L',
        long = "level",
        help = "Logging level",
        value_name = "LEVEL",
        default_value_t = log::Level::Info,
    )]
    pub level: log::Level,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode text as DNA and run it through mutation, splicing and translation
    Simulate(SimulateArgs),

    /// Scan a DNA sequence for GT...AG introns and list its exons
    Splice(SpliceArgs),

    /// Translate an RNA sequence with the standard genetic code
    Translate(TranslateArgs),

    /// Report SNPs between a reference and a variant DNA sequence
    Compare(CompareArgs),
}

/// Parse a mutation rate given in percent.
fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("{value} is outside 0-100"));
    }
    Ok(value)
}

#[derive(Debug, Parser)]
pub struct SimulateArgs {
    #[arg(help = "Text to encode", conflicts_with = "input")]
    pub text: Option<String>,

    #[arg(
        short = 'i',
        long = "input",
        required = false,
        help = "Read the text from a file instead"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'r',
        long = "rate-percent",
        required = false,
        help = "Mutation rate in percent (0-100)",
        default_value = "0",
        value_parser = parse_percent
    )]
    pub rate_percent: f64,

    #[arg(
        short = 's',
        long = "start-codon",
        help = "Prepend ATG to the DNA before mutation"
    )]
    pub start_codon: bool,

    #[arg(long = "no-splice", help = "Translate the whole mutated DNA, introns included")]
    pub no_splice: bool,

    #[arg(
        long = "seed",
        required = false,
        help = "Seed for the mutation PRNG",
        default_value = "42"
    )]
    pub seed: u64,

    #[arg(long = "json", help = "Print the full report as JSON")]
    pub json: bool,
}

impl SimulateArgs {
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            mutation_rate: self.rate_percent / 100.0,
            prepend_start_codon: self.start_codon,
            splice: !self.no_splice,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Parser)]
pub struct SpliceArgs {
    #[arg(help = "DNA sequence (A, C, G, T)")]
    pub dna: DnaSequence,

    #[arg(long = "json", help = "Print regions as JSON")]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct TranslateArgs {
    #[arg(help = "RNA sequence (A, C, G, U)")]
    pub rna: RnaSequence,

    #[arg(long = "json", help = "Print the translation as JSON")]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct CompareArgs {
    #[arg(help = "Reference DNA sequence")]
    pub reference: DnaSequence,

    #[arg(help = "Variant DNA sequence")]
    pub variant: DnaSequence,

    #[arg(long = "json", help = "Print the comparison as JSON")]
    pub json: bool,
}
