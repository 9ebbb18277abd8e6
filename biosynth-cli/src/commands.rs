use anyhow::{bail, Context, Result};
use log::{info, warn};

use biosynth_seq::{simulate, SpliceMap, VariantComparison};

use crate::cli::{CompareArgs, SimulateArgs, SpliceArgs, TranslateArgs};
use crate::report;

/// Resolve the text to encode from the positional argument or `--input`.
fn read_text(args: &SimulateArgs) -> Result<String> {
    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        (None, None) => bail!("no input text: pass TEXT or --input PATH"),
    };
    if text.trim().is_empty() {
        bail!("input text is empty: enter some text to start the simulation");
    }
    Ok(text)
}

pub fn run_simulate(args: SimulateArgs) -> Result<String> {
    let text = read_text(&args)?;
    let config = args.config();
    info!(
        "Simulating {} chars (rate {:.3}, start codon {}, splice {})",
        text.chars().count(),
        config.mutation_rate,
        config.prepend_start_codon,
        config.splice
    );

    let report = simulate(&text, &config)?;
    if !report.starts_with_start_codon {
        warn!("DNA does not start with ATG; the protein may not be biologically meaningful");
    }

    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report::render_simulation(&report))
    }
}

pub fn run_splice(args: SpliceArgs) -> Result<String> {
    let map = SpliceMap::scan(&args.dna);
    info!("Found {} introns and {} exons", map.introns.len(), map.exons.len());
    if args.json {
        Ok(serde_json::to_string_pretty(&map)?)
    } else {
        Ok(report::render_splice_map(&map))
    }
}

pub fn run_translate(args: TranslateArgs) -> Result<String> {
    let translation = args.rna.translate();
    if args.json {
        Ok(serde_json::to_string_pretty(&translation)?)
    } else {
        Ok(report::render_translation(&translation))
    }
}

pub fn run_compare(args: CompareArgs) -> Result<String> {
    let comparison = VariantComparison::new(&args.reference, &args.variant);
    if comparison.length_mismatch() {
        warn!(
            "Sequences differ in length ({} vs {}); comparing the first {} bases",
            comparison.reference_len,
            comparison.variant_len,
            comparison.compared()
        );
    }
    if args.json {
        Ok(serde_json::to_string_pretty(&comparison)?)
    } else {
        Ok(report::render_comparison(&comparison))
    }
}
