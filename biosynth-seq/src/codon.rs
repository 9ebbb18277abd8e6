//! The standard genetic code and codon-by-codon translation.
//!
//! [`Translator`] walks an RNA sequence in non-overlapping 3-base windows
//! from offset 0, yielding one residue per codon until it reads a stop
//! codon or runs out of complete codons. A trailing partial codon is
//! ignored.

use crate::types::{ProteinSequence, RnaSequence};

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, T/U=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Convert an index in [0, 64) back to an RNA codon.
fn index_to_codon(idx: usize) -> [u8; 3] {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'U'];
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

/// Marker stored in the table for stop codons.
const STOP: u8 = b'*';

// Codon order: AAA, AAC, AAG, AAU, ACA, ACC, ACG, ACU, AGA, AGC, AGG, AGU,
//              AUA, AUC, AUG, AUU, CAA, CAC, CAG, CAU, CCA, CCC, CCG, CCU,
//              CGA, CGC, CGG, CGU, CUA, CUC, CUG, CUU, GAA, GAC, GAG, GAU,
//              GCA, GCC, GCG, GCU, GGA, GGC, GGG, GGU, GUA, GUC, GUG, GUU,
//              UAA, UAC, UAG, UAU, UCA, UCC, UCG, UCU, UGA, UGC, UGG, UGU,
//              UUA, UUC, UUG, UUU

/// Standard genetic code (NCBI Table 1).
const STANDARD_TABLE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

// ---------------------------------------------------------------------------
// CodonTable
// ---------------------------------------------------------------------------

/// What a codon means to the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonMeaning {
    /// A one-letter amino acid code.
    Residue(u8),
    /// Halt translation without emitting a residue.
    Stop,
}

/// A read-only mapping from the 64 codons to residues or stop.
#[derive(Debug, Clone, Copy)]
pub struct CodonTable {
    table: &'static [u8; 64],
}

/// The standard genetic code, shared by every translation.
pub static STANDARD_CODE: CodonTable = CodonTable {
    table: &STANDARD_TABLE,
};

impl CodonTable {
    /// The standard genetic code (NCBI Table 1).
    pub fn standard() -> &'static CodonTable {
        &STANDARD_CODE
    }

    /// Look up a codon. Accepts both DNA (T) and RNA (U) spellings.
    ///
    /// Returns `None` if the slice is not exactly three valid bases.
    pub fn lookup(&self, codon: &[u8]) -> Option<CodonMeaning> {
        let idx = codon_index(codon)?;
        Some(self.meaning_at(idx))
    }

    /// Whether a codon is a stop codon.
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.lookup(codon) == Some(CodonMeaning::Stop)
    }

    /// All stop codons, as RNA.
    pub fn stop_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.table[i] == STOP)
            .map(index_to_codon)
            .collect()
    }

    fn meaning_at(&self, idx: usize) -> CodonMeaning {
        match self.table[idx] {
            STOP => CodonMeaning::Stop,
            aa => CodonMeaning::Residue(aa),
        }
    }
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Translator state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    Running,
    Stopped,
}

/// Iterator over the residues encoded by an RNA sequence.
///
/// Starts `Running` at offset 0 and moves to `Stopped` on the first stop
/// codon. Exhausting the complete codons leaves the state `Running`.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    rna: &'a [u8],
    table: &'a CodonTable,
    offset: usize,
    state: TranslationState,
}

impl<'a> Translator<'a> {
    /// Translate `rna` with the given codon table.
    pub fn new(rna: &'a RnaSequence, table: &'a CodonTable) -> Self {
        Self {
            rna: &rna[..],
            table,
            offset: 0,
            state: TranslationState::Running,
        }
    }

    /// Current state.
    pub fn state(&self) -> TranslationState {
        self.state
    }

    /// Offset of the next codon to be read.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Translator<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.state == TranslationState::Stopped {
            return None;
        }
        let codon = self.rna.get(self.offset..self.offset + 3)?;
        self.offset += 3;
        match self.table.lookup(codon)? {
            CodonMeaning::Residue(aa) => Some(aa),
            CodonMeaning::Stop => {
                self.state = TranslationState::Stopped;
                None
            }
        }
    }
}

/// The product of translating an RNA sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Translation {
    /// Residues up to (not including) the first stop codon.
    pub protein: ProteinSequence,
    /// Whether translation ended on a stop codon.
    pub stop_seen: bool,
}

/// Translate with the standard genetic code.
pub fn translate(rna: &RnaSequence) -> Translation {
    translate_with(rna, CodonTable::standard())
}

/// Translate with an explicit codon table.
pub fn translate_with(rna: &RnaSequence, table: &CodonTable) -> Translation {
    let mut translator = Translator::new(rna, table);
    let residues: Vec<u8> = translator.by_ref().collect();
    Translation {
        protein: ProteinSequence::from_validated(residues),
        stop_seen: translator.state() == TranslationState::Stopped,
    }
}

// ---------------------------------------------------------------------------
// Substitution classification
// ---------------------------------------------------------------------------

/// Effect of a nucleotide change on the codon it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SubstitutionClass {
    /// Both codons encode the same amino acid.
    Synonymous,
    /// The codons encode different amino acids (neither is a stop).
    NonSynonymous,
    /// At least one codon is a stop codon.
    StopInvolved,
}

/// Classify the change between two codons by the residues they encode.
///
/// Returns `None` if either slice is not a complete codon.
pub fn classify_substitution(
    codon1: &[u8],
    codon2: &[u8],
    table: &CodonTable,
) -> Option<SubstitutionClass> {
    let class = match (table.lookup(codon1)?, table.lookup(codon2)?) {
        (CodonMeaning::Stop, _) | (_, CodonMeaning::Stop) => SubstitutionClass::StopInvolved,
        (a, b) if a == b => SubstitutionClass::Synonymous,
        _ => SubstitutionClass::NonSynonymous,
    };
    Some(class)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use biosynth_core::Sequence;
    use proptest::prelude::*;

    fn rna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'U')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn one_residue_per_codon_before_stop(bytes in rna_seq(60)) {
            let seq = RnaSequence::new(&bytes).unwrap();
            let t = translate(&seq);
            let full_codons = bytes.len() / 3;
            prop_assert!(t.protein.len() <= full_codons);
            if t.stop_seen {
                let stop_at = t.protein.len() * 3;
                prop_assert!(CodonTable::standard().is_stop(&bytes[stop_at..stop_at + 3]));
            } else {
                prop_assert_eq!(t.protein.len(), full_codons);
            }
        }

        #[test]
        fn trailing_bases_do_not_matter(bytes in rna_seq(30), tail in rna_seq(2)) {
            let trimmed = &bytes[..bytes.len() - bytes.len() % 3];
            let mut padded = trimmed.to_vec();
            padded.extend_from_slice(&tail);
            let a = translate(&RnaSequence::new(trimmed).unwrap());
            let b = translate(&RnaSequence::new(&padded).unwrap());
            prop_assert_eq!(a, b);
        }
    }
}
