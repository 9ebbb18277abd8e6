//! End-to-end simulation: text → DNA → mutation → splicing → RNA → protein.
//!
//! [`simulate`] runs the standard [`Pipeline`], optionally prepends the
//! start codon, mutates at the configured rate, scans the mutated DNA for
//! introns, transcribes the exon-only sequence and translates it. Every
//! intermediate product is kept in the returned [`SimulationReport`].

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use biosynth_core::hash::sha256;
use biosynth_core::Result;

use crate::codon::{classify_substitution, CodonTable, SubstitutionClass};
use crate::mutation::{mutate, MutationRecord};
use crate::pipeline::Pipeline;
use crate::splice::{SpliceMap, SpliceRegion};
use crate::types::{DnaSequence, ProteinSequence, RnaSequence};

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Per-base substitution probability in `[0, 1]` (default 0.0).
    pub mutation_rate: f64,
    /// Prepend `ATG` before mutation (default false).
    pub prepend_start_codon: bool,
    /// Translate only exons; otherwise the whole mutated DNA (default true).
    pub splice: bool,
    /// PRNG seed for reproducibility (default 42).
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.0,
            prepend_start_codon: false,
            splice: true,
            seed: 42,
        }
    }
}

/// What a single mutation did to the codon it landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MutationEffect {
    pub position: usize,
    pub class: SubstitutionClass,
}

/// Every product of a simulation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationReport {
    pub input: String,
    /// Pipeline output, with the start codon if requested.
    pub original_dna: DnaSequence,
    /// SHA-256 of `original_dna`.
    pub digest: String,
    pub mutated_dna: DnaSequence,
    pub mutations: Vec<MutationRecord>,
    /// Codon-level effect of each mutation in the unspliced reading frame.
    pub effects: Vec<MutationEffect>,
    pub introns: Vec<SpliceRegion>,
    pub exons: Vec<SpliceRegion>,
    /// The DNA that was transcribed: exons only when splicing is enabled.
    pub coding_dna: DnaSequence,
    pub rna: RnaSequence,
    pub protein: ProteinSequence,
    pub stop_seen: bool,
    pub starts_with_start_codon: bool,
    pub gc_content: f64,
}

impl SimulationReport {
    /// Whether any base was mutated.
    pub fn changed(&self) -> bool {
        !self.mutations.is_empty()
    }
}

/// Run a simulation with a generator seeded from `config.seed`.
pub fn simulate(text: &str, config: &SimulationConfig) -> Result<SimulationReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    simulate_with_rng(text, config, &mut rng)
}

/// Run a simulation drawing randomness from `rng`.
///
/// `config.seed` is ignored.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    text: &str,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationReport> {
    let mut original_dna = Pipeline::standard().encode(text)?;
    if config.prepend_start_codon {
        original_dna = original_dna.with_start_codon();
    }
    debug!("encoded {} chars into {} bases", text.chars().count(), original_dna.len());

    let mutated = mutate(&original_dna, config.mutation_rate, rng)?;
    debug!(
        "{} mutations at rate {}",
        mutated.records.len(),
        config.mutation_rate
    );
    let effects = mutation_effects(&original_dna, &mutated.sequence, &mutated.records);

    let splice_map = SpliceMap::scan(&mutated.sequence);
    debug!(
        "{} introns, {} exons",
        splice_map.introns.len(),
        splice_map.exons.len()
    );
    let coding_dna = if config.splice {
        splice_map.spliced()
    } else {
        mutated.sequence.clone()
    };

    let rna = coding_dna.transcribe();
    let translation = rna.translate();
    debug!(
        "translated {} residues, stop codon {}",
        translation.protein.len(),
        if translation.stop_seen { "seen" } else { "not seen" }
    );

    Ok(SimulationReport {
        input: text.to_owned(),
        digest: sha256(&original_dna),
        starts_with_start_codon: mutated.sequence.starts_with_start_codon(),
        gc_content: mutated.sequence.gc_content(),
        original_dna,
        mutated_dna: mutated.sequence,
        mutations: mutated.records,
        effects,
        introns: splice_map.introns,
        exons: splice_map.exons,
        coding_dna,
        rna,
        protein: translation.protein,
        stop_seen: translation.stop_seen,
    })
}

/// Classify each mutation by comparing the frame-0 codons that contain it.
///
/// Mutations in a trailing partial codon have no effect entry.
fn mutation_effects(
    original: &[u8],
    mutated: &[u8],
    records: &[MutationRecord],
) -> Vec<MutationEffect> {
    let table = CodonTable::standard();
    records
        .iter()
        .filter_map(|r| {
            let start = r.position - r.position % 3;
            let before = original.get(start..start + 3)?;
            let after = mutated.get(start..start + 3)?;
            let class = classify_substitution(before, after, table)?;
            Some(MutationEffect {
                position: r.position,
                class,
            })
        })
        .collect()
}
