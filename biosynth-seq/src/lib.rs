//! Text-to-protein simulation for the biosynth workspace.
//!
//! Turns arbitrary text into a DNA sequence through a pipeline of pure
//! text stages, then walks it through the central dogma:
//!
//! - **Pipeline**: [`Pipeline`] of [`Stage`]s ([`stages`])
//! - **Sequences**: [`DnaSequence`], [`RnaSequence`], [`ProteinSequence`]
//! - **Mutation**: per-base random substitution ([`mutate`])
//! - **Splicing**: `GT...AG` intron scan and exon extraction ([`splice`])
//! - **Translation**: standard genetic code with stop handling ([`codon`])
//! - **Variants**: SNP comparison of two sequences ([`variant`])
//! - **Simulation**: all of the above in one call ([`simulate()`])
//!
//! # Example
//!
//! ```
//! use biosynth_seq::{Pipeline, RnaSequence};
//!
//! let dna = Pipeline::standard().encode("Hi DNA").unwrap();
//! assert_eq!(dna.as_str(), "TATTCA");
//!
//! let rna = dna.transcribe();
//! assert_eq!(rna.as_str(), "UAUUCA");
//!
//! let translation = RnaSequence::new(b"AUGUUUUAA").unwrap().translate();
//! assert_eq!(translation.protein.as_str(), "MF");
//! assert!(translation.stop_seen);
//! ```

pub mod alphabet;
pub mod codon;
pub mod mutation;
pub mod pipeline;
pub mod seq;
pub mod simulate;
pub mod splice;
pub mod stages;
pub mod types;
pub mod variant;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet, RnaAlphabet};

// Re-export the generic sequence type
pub use seq::ValidatedSeq;

// Re-export concrete type aliases and helpers
pub use types::{amino_acid_name, transcribe, DnaSequence, ProteinSequence, RnaSequence, START_CODON};

// Re-export the pipeline
pub use pipeline::{Pipeline, Stage};
pub use stages::{CharacterCapitalizer, DnaBaseConverter, SpaceRemover, SpecialCharactersRemover};

// Re-export mutation
pub use mutation::{mutate, MutationRecord, Mutated};

// Re-export splicing
pub use splice::{extract_exons, find_introns, RegionKind, SpliceMap, SpliceRegion};

// Re-export codon translation
pub use codon::{classify_substitution, translate, CodonTable, SubstitutionClass, Translation};

// Re-export variant comparison
pub use variant::{find_snps, Snp, SubstitutionKind, VariantComparison};

// Re-export the simulation entry points
pub use simulate::{simulate, simulate_with_rng, SimulationConfig, SimulationReport};
