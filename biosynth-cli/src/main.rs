use clap::Parser;
use log::info;
use simple_logger::init_with_level;

use biosynth_cli::{
    cli::{Args, Commands},
    commands::{run_compare, run_simulate, run_splice, run_translate},
};

fn main() -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    let args = Args::parse();

    init_with_level(args.level)?;

    let output = match args.command {
        Commands::Simulate(args) => run_simulate(args)?,
        Commands::Splice(args) => run_splice(args)?,
        Commands::Translate(args) => run_translate(args)?,
        Commands::Compare(args) => run_compare(args)?,
    };
    println!("{output}");

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
    Ok(())
}
