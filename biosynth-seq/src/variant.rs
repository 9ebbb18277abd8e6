//! Position-by-position comparison of a reference and a variant sequence.
//!
//! Compares the two sequences over their shared length and reports every
//! single-nucleotide difference, classified as a transition or a
//! transversion.

use crate::types::DnaSequence;

/// Chemical class of a point substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubstitutionKind {
    /// Purine to purine (A↔G) or pyrimidine to pyrimidine (C↔T).
    Transition,
    /// Purine to pyrimidine or the reverse.
    Transversion,
}

fn is_purine(b: u8) -> bool {
    matches!(b, b'A' | b'G')
}

impl SubstitutionKind {
    /// Classify the change from `from` to `to`.
    pub fn of(from: u8, to: u8) -> Self {
        if is_purine(from) == is_purine(to) {
            SubstitutionKind::Transition
        } else {
            SubstitutionKind::Transversion
        }
    }
}

/// A single-nucleotide polymorphism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snp {
    pub position: usize,
    pub reference: char,
    pub variant: char,
    pub kind: SubstitutionKind,
}

/// Every SNP between `reference` and `variant`, in position order.
///
/// Only the shared prefix is compared; extra bases on the longer sequence
/// are not reported as SNPs.
pub fn find_snps(reference: &DnaSequence, variant: &DnaSequence) -> Vec<Snp> {
    reference
        .iter()
        .zip(variant.iter())
        .enumerate()
        .filter(|(_, (r, v))| r != v)
        .map(|(position, (&r, &v))| Snp {
            position,
            reference: r as char,
            variant: v as char,
            kind: SubstitutionKind::of(r, v),
        })
        .collect()
}

/// Aggregate view of a reference/variant comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VariantComparison {
    pub reference_len: usize,
    pub variant_len: usize,
    pub snps: Vec<Snp>,
    pub transitions: usize,
    pub transversions: usize,
}

impl VariantComparison {
    /// Compare two sequences.
    pub fn new(reference: &DnaSequence, variant: &DnaSequence) -> Self {
        let snps = find_snps(reference, variant);
        let transitions = snps
            .iter()
            .filter(|s| s.kind == SubstitutionKind::Transition)
            .count();
        Self {
            reference_len: reference.len(),
            variant_len: variant.len(),
            transversions: snps.len() - transitions,
            transitions,
            snps,
        }
    }

    /// Number of positions compared.
    pub fn compared(&self) -> usize {
        self.reference_len.min(self.variant_len)
    }

    /// Whether the two sequences differ in length.
    pub fn length_mismatch(&self) -> bool {
        self.reference_len != self.variant_len
    }

    /// Transition/transversion ratio, `None` when there are no transversions.
    pub fn ts_tv_ratio(&self) -> Option<f64> {
        if self.transversions == 0 {
            return None;
        }
        Some(self.transitions as f64 / self.transversions as f64)
    }

    /// SNP positions, for histogramming.
    pub fn positions(&self) -> Vec<usize> {
        self.snps.iter().map(|s| s.position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s.as_bytes()).unwrap()
    }

    #[test]
    fn classify_kinds() {
        assert_eq!(SubstitutionKind::of(b'A', b'G'), SubstitutionKind::Transition);
        assert_eq!(SubstitutionKind::of(b'C', b'T'), SubstitutionKind::Transition);
        assert_eq!(SubstitutionKind::of(b'A', b'C'), SubstitutionKind::Transversion);
        assert_eq!(SubstitutionKind::of(b'G', b'T'), SubstitutionKind::Transversion);
    }

    #[test]
    fn identical_sequences_have_no_snps() {
        let seq = dna("ACGTACGT");
        assert!(find_snps(&seq, &seq).is_empty());
    }

    #[test]
    fn finds_each_difference() {
        let snps = find_snps(&dna("ACGTACGT"), &dna("GCGTACCT"));
        assert_eq!(
            snps,
            vec![
                Snp {
                    position: 0,
                    reference: 'A',
                    variant: 'G',
                    kind: SubstitutionKind::Transition,
                },
                Snp {
                    position: 6,
                    reference: 'G',
                    variant: 'C',
                    kind: SubstitutionKind::Transversion,
                },
            ]
        );
    }

    #[test]
    fn comparison_counts() {
        let cmp = VariantComparison::new(&dna("ACGTACGTAA"), &dna("GCGTACCT"));
        assert_eq!(cmp.transitions, 1);
        assert_eq!(cmp.transversions, 1);
        assert_eq!(cmp.compared(), 8);
        assert!(cmp.length_mismatch());
        assert_eq!(cmp.ts_tv_ratio(), Some(1.0));
        assert_eq!(cmp.positions(), vec![0, 6]);
    }

    #[test]
    fn ratio_undefined_without_transversions() {
        let cmp = VariantComparison::new(&dna("AAAA"), &dna("AGAA"));
        assert_eq!(cmp.ts_tv_ratio(), None);
        assert!(!cmp.length_mismatch());
    }
}
