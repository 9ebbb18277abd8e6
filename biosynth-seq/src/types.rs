//! Concrete sequence type aliases and biologically meaningful operations.
//!
//! - [`DnaSequence`]: transcription, start-codon handling, GC content
//! - [`RnaSequence`]: translation
//! - [`ProteinSequence`]: molecular weight, residue names

use crate::alphabet::{DnaAlphabet, ProteinAlphabet, RnaAlphabet};
use crate::codon::{self, Translation};
use crate::seq::ValidatedSeq;

/// A validated DNA sequence over `ACGT`.
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence over `ACGU`.
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

/// A validated protein sequence over the 20 standard residues.
pub type ProteinSequence = ValidatedSeq<ProteinAlphabet>;

/// The canonical start codon, in DNA form.
pub const START_CODON: &[u8; 3] = b"ATG";

/// Replace every `T` with `U`, leaving all other bytes in place.
///
/// Total over arbitrary bytes and idempotent: a second pass finds no `T`.
pub fn transcribe(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|&b| if b == b'T' { b'U' } else { b })
        .collect()
}

// ---------------------------------------------------------------------------
// DNA methods
// ---------------------------------------------------------------------------

impl DnaSequence {
    /// Transcribe DNA to RNA (T → U).
    pub fn transcribe(&self) -> RnaSequence {
        RnaSequence::from_validated(transcribe(self))
    }

    /// Translate DNA to protein (transcribes first, then translates).
    pub fn translate(&self) -> Translation {
        self.transcribe().translate()
    }

    /// Return a copy with [`START_CODON`] prepended.
    pub fn with_start_codon(&self) -> DnaSequence {
        let mut data = Vec::with_capacity(self.len() + 3);
        data.extend_from_slice(START_CODON);
        data.extend_from_slice(self);
        DnaSequence::from_validated(data)
    }

    /// Whether the sequence begins with [`START_CODON`].
    pub fn starts_with_start_codon(&self) -> bool {
        self.starts_with(START_CODON)
    }

    /// Number of occurrences of `base`.
    pub fn count(&self, base: u8) -> usize {
        self.iter().filter(|&&b| b == base).count()
    }

    /// GC content as a fraction in [0.0, 1.0].
    ///
    /// Returns 0.0 for empty sequences.
    pub fn gc_content(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let gc = self.count(b'G') + self.count(b'C');
        gc as f64 / self.len() as f64
    }
}

// ---------------------------------------------------------------------------
// RNA methods
// ---------------------------------------------------------------------------

impl RnaSequence {
    /// Translate RNA to protein using the standard genetic code.
    pub fn translate(&self) -> Translation {
        codon::translate(self)
    }
}

// ---------------------------------------------------------------------------
// Protein methods
// ---------------------------------------------------------------------------

/// Average molecular weights (Da) for each amino acid.
fn amino_acid_weight(aa: u8) -> f64 {
    match aa {
        b'A' => 89.09, b'R' => 174.20, b'N' => 132.12, b'D' => 133.10,
        b'C' => 121.16, b'E' => 147.13, b'Q' => 146.15, b'G' => 75.03,
        b'H' => 155.16, b'I' => 131.17, b'L' => 131.17, b'K' => 146.19,
        b'M' => 149.21, b'F' => 165.19, b'P' => 115.13, b'S' => 105.09,
        b'T' => 119.12, b'W' => 204.23, b'Y' => 181.19, b'V' => 117.15,
        _ => 128.16,
    }
}

/// Full residue name for a one-letter amino acid code.
pub fn amino_acid_name(aa: u8) -> Option<&'static str> {
    let name = match aa {
        b'A' => "Alanine",
        b'R' => "Arginine",
        b'N' => "Asparagine",
        b'D' => "Aspartic acid",
        b'C' => "Cysteine",
        b'E' => "Glutamic acid",
        b'Q' => "Glutamine",
        b'G' => "Glycine",
        b'H' => "Histidine",
        b'I' => "Isoleucine",
        b'L' => "Leucine",
        b'K' => "Lysine",
        b'M' => "Methionine",
        b'F' => "Phenylalanine",
        b'P' => "Proline",
        b'S' => "Serine",
        b'T' => "Threonine",
        b'W' => "Tryptophan",
        b'Y' => "Tyrosine",
        b'V' => "Valine",
        _ => return None,
    };
    Some(name)
}

impl ProteinSequence {
    /// Estimated molecular weight in Daltons.
    ///
    /// Sum of residue weights minus (n-1) water molecules lost in peptide bonds.
    pub fn molecular_weight(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.iter().map(|&aa| amino_acid_weight(aa)).sum();
        let water = 18.015;
        sum - (self.len() as f64 - 1.0) * water
    }

    /// Residue names in sequence order.
    pub fn residue_names(&self) -> Vec<&'static str> {
        self.iter().filter_map(|&aa| amino_acid_name(aa)).collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn transcription_replaces_only_thymine(bytes in dna_seq(300)) {
            let rna = transcribe(&bytes);
            prop_assert_eq!(rna.len(), bytes.len());
            prop_assert!(!rna.contains(&b'T'));
            for (&d, &r) in bytes.iter().zip(rna.iter()) {
                if d == b'T' {
                    prop_assert_eq!(r, b'U');
                } else {
                    prop_assert_eq!(r, d);
                }
            }
        }

        #[test]
        fn transcription_is_idempotent(bytes in dna_seq(300)) {
            let once = transcribe(&bytes);
            prop_assert_eq!(transcribe(&once), once.clone());
            let dna = DnaSequence::new(&bytes).unwrap();
            let rna = dna.transcribe();
            prop_assert_eq!(&rna[..], &once[..]);
        }
    }
}
