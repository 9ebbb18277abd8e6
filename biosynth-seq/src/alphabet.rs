//! Alphabet definitions for biological sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the exact set of bytes a sequence of that kind may contain.
//! There are no ambiguity codes: a DNA sequence is `A`, `C`, `G`, `T` and
//! nothing else.

/// Trait for biological sequence alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Sequence
/// constructors validate every byte against it and never rewrite input.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// Unit used when counting residues ("bp", "nt", "aa").
    const UNIT: &'static str;

    /// The set of valid bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte belongs to the alphabet.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const UNIT: &'static str = "bp";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

/// RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const UNIT: &'static str = "nt";
    const VALID_BYTES: &'static [u8] = b"ACGU";
}

/// Protein alphabet: the 20 standard one-letter amino acid codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "Protein";
    const UNIT: &'static str = "aa";
    const VALID_BYTES: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY";
}
