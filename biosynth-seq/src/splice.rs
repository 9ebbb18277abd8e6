//! Splice-site scanning: introns by the `GT...AG` rule, exons as the rest.
//!
//! The scan is leftmost, shortest-match and non-overlapping. From the
//! current offset it finds the first `GT`, then the first `AG` that starts
//! at or after the end of that `GT`; the span between them (inclusive) is
//! an intron, and scanning resumes right after it. Candidate introns that
//! overlap an earlier match are therefore never reported, e.g. `GTAGTAG`
//! yields the single intron `GTAG`.
//!
//! Introns and exons partition the input: interleaving them by position
//! reproduces the original sequence exactly.

use crate::types::DnaSequence;

/// 5' splice-site (donor) marker.
pub const DONOR: &[u8; 2] = b"GT";
/// 3' splice-site (acceptor) marker.
pub const ACCEPTOR: &[u8; 2] = b"AG";

/// Whether a region was spliced out or retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionKind {
    Intron,
    Exon,
}

/// A half-open `[start, end)` slice of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpliceRegion {
    pub kind: RegionKind,
    pub start: usize,
    pub end: usize,
    pub sequence: String,
}

impl SpliceRegion {
    fn new(kind: RegionKind, seq: &[u8], start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            sequence: seq[start..end].iter().map(|&b| b as char).collect(),
        }
    }

    /// Region length in bases.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the region covers no bases.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

fn find_marker(seq: &[u8], from: usize, marker: &[u8; 2]) -> Option<usize> {
    seq.get(from..)?
        .windows(2)
        .position(|w| w == marker)
        .map(|i| from + i)
}

/// Find intron-like regions bounded by `GT` and `AG`.
///
/// Returns regions in ascending, non-overlapping order.
pub fn find_introns(seq: &[u8]) -> Vec<SpliceRegion> {
    let mut introns = Vec::new();
    let mut pos = 0;
    while let Some(donor) = find_marker(seq, pos, DONOR) {
        // No acceptor after the leftmost donor means none after any later one.
        let Some(acceptor) = find_marker(seq, donor + DONOR.len(), ACCEPTOR) else {
            break;
        };
        let end = acceptor + ACCEPTOR.len();
        introns.push(SpliceRegion::new(RegionKind::Intron, seq, donor, end));
        pos = end;
    }
    introns
}

/// The gaps around and between `introns`, skipping empty gaps.
///
/// With no introns the whole sequence is one exon (unless it is empty).
pub fn extract_exons(seq: &[u8], introns: &[SpliceRegion]) -> Vec<SpliceRegion> {
    let mut exons = Vec::new();
    let mut last = 0;
    for intron in introns {
        if last < intron.start {
            exons.push(SpliceRegion::new(RegionKind::Exon, seq, last, intron.start));
        }
        last = intron.end;
    }
    if last < seq.len() {
        exons.push(SpliceRegion::new(RegionKind::Exon, seq, last, seq.len()));
    }
    exons
}

/// Both halves of a splice scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpliceMap {
    pub introns: Vec<SpliceRegion>,
    pub exons: Vec<SpliceRegion>,
}

impl SpliceMap {
    /// Scan `dna` for introns and derive its exons.
    pub fn scan(dna: &DnaSequence) -> Self {
        let introns = find_introns(dna);
        let exons = extract_exons(dna, &introns);
        Self { introns, exons }
    }

    /// Exons joined in order: the spliced coding sequence.
    pub fn spliced(&self) -> DnaSequence {
        let data: Vec<u8> = self
            .exons
            .iter()
            .flat_map(|e| e.sequence.bytes())
            .collect();
        DnaSequence::from_validated(data)
    }

    /// All regions in positional order.
    pub fn regions(&self) -> Vec<&SpliceRegion> {
        let mut all: Vec<&SpliceRegion> = self.introns.iter().chain(&self.exons).collect();
        all.sort_by_key(|r| r.start);
        all
    }

    /// Concatenate every region back into the scanned sequence.
    pub fn reassemble(&self) -> String {
        self.regions().into_iter().map(|r| r.sequence.as_str()).collect()
    }
}
