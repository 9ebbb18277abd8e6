//! Random point substitutions at a fixed per-base rate.
//!
//! Each position is considered independently: with probability `rate` the
//! base is replaced by one of the other three, chosen uniformly. The
//! candidate set never contains the original base, so a drawn position is
//! always a real change.
//!
//! Randomness comes from a caller-supplied [`rand::Rng`], so a seeded
//! generator gives reproducible results.

use log::trace;
use rand::Rng;

use biosynth_core::{BiosynthError, Result};

use crate::types::DnaSequence;
use crate::variant::SubstitutionKind;

/// The three substitutes for each base, indexed A=0, C=1, G=2, T=3.
const SUBSTITUTES: [[u8; 3]; 4] = [*b"CGT", *b"AGT", *b"ACT", *b"ACG"];

fn substitutes(base: u8) -> &'static [u8; 3] {
    match base {
        b'A' => &SUBSTITUTES[0],
        b'C' => &SUBSTITUTES[1],
        b'G' => &SUBSTITUTES[2],
        _ => &SUBSTITUTES[3],
    }
}

/// One substituted position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationRecord {
    /// 0-based position in the sequence.
    pub position: usize,
    /// Base before mutation.
    pub original: char,
    /// Base after mutation. Never equal to `original`.
    pub mutated: char,
}

impl MutationRecord {
    /// Transition (purine↔purine, pyrimidine↔pyrimidine) or transversion.
    pub fn kind(&self) -> SubstitutionKind {
        SubstitutionKind::of(self.original as u8, self.mutated as u8)
    }
}

/// A mutated sequence together with what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutated {
    pub sequence: DnaSequence,
    pub records: Vec<MutationRecord>,
}

impl Mutated {
    /// Whether at least one position was substituted.
    pub fn changed(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Substitute each base of `dna` with probability `rate`.
///
/// `rate` must lie in `[0, 1]`; anything else (including NaN) is an
/// [`InvalidInput`](BiosynthError::InvalidInput) error. At `rate = 0` the
/// sequence is returned unchanged; at `rate = 1` every base changes.
pub fn mutate<R: Rng + ?Sized>(dna: &DnaSequence, rate: f64, rng: &mut R) -> Result<Mutated> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(BiosynthError::InvalidInput(format!(
            "mutation rate must be within [0, 1], got {rate}"
        )));
    }

    let mut data = dna.to_vec();
    let mut records = Vec::new();
    for (position, base) in data.iter_mut().enumerate() {
        if rng.gen::<f64>() < rate {
            let original = *base;
            *base = substitutes(original)[rng.gen_range(0..3)];
            let record = MutationRecord {
                position,
                original: original as char,
                mutated: *base as char,
            };
            trace!("mutation at {}: {} -> {}", position, record.original, record.mutated);
            records.push(record);
        }
    }

    Ok(Mutated {
        sequence: DnaSequence::from_validated(data),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosynth_core::Sequence;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s.as_bytes()).unwrap()
    }

    #[test]
    fn substitutes_exclude_original() {
        for &b in b"ACGT" {
            assert!(!substitutes(b).contains(&b));
            assert_eq!(substitutes(b).len(), 3);
        }
    }

    #[test]
    fn rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = dna("ACGTACGTACGT");
        let out = mutate(&input, 0.0, &mut rng).unwrap();
        assert!(!out.changed());
        assert_eq!(out.sequence, input);
    }

    #[test]
    fn rate_one_changes_every_base() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = dna("AAAACCCCGGGGTTTT");
        let out = mutate(&input, 1.0, &mut rng).unwrap();
        assert!(out.changed());
        assert_eq!(out.records.len(), input.len());
        for (a, b) in input.iter().zip(out.sequence.iter()) {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn records_match_sequence() {
        let mut rng = StdRng::seed_from_u64(11);
        let input = dna("GATTACAGATTACAGATTACA");
        let out = mutate(&input, 0.5, &mut rng).unwrap();
        for r in &out.records {
            assert_eq!(input[r.position] as char, r.original);
            assert_eq!(out.sequence[r.position] as char, r.mutated);
            assert_ne!(r.original, r.mutated);
        }
        let untouched = (0..input.len())
            .filter(|i| !out.records.iter().any(|r| r.position == *i))
            .all(|i| input[i] == out.sequence[i]);
        assert!(untouched);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let input = dna("ACGTACGTACGTACGTACGT");
        let a = mutate(&input, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = mutate(&input, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_sequence_never_changes() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = mutate(&DnaSequence::empty(), 1.0, &mut rng).unwrap();
        assert!(!out.changed());
        assert!(out.sequence.is_empty());
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = dna("ACGT");
        for rate in [-0.1, 1.000_001, f64::NAN, f64::INFINITY] {
            let err = mutate(&input, rate, &mut rng).unwrap_err();
            assert!(matches!(err, BiosynthError::InvalidInput(_)), "rate {rate}");
        }
    }

    #[test]
    fn record_kind() {
        let ts = MutationRecord {
            position: 0,
            original: 'A',
            mutated: 'G',
        };
        let tv = MutationRecord {
            position: 0,
            original: 'A',
            mutated: 'T',
        };
        assert_eq!(ts.kind(), SubstitutionKind::Transition);
        assert_eq!(tv.kind(), SubstitutionKind::Transversion);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn mutated_positions_always_differ(
            bytes in dna_seq(100),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let input = DnaSequence::new(&bytes).unwrap();
            let out = mutate(&input, rate, &mut StdRng::seed_from_u64(seed)).unwrap();
            prop_assert_eq!(out.sequence.len(), input.len());
            for r in &out.records {
                prop_assert_ne!(input[r.position], out.sequence[r.position]);
            }
            let differing = input.iter().zip(out.sequence.iter()).filter(|(a, b)| a != b).count();
            prop_assert_eq!(differing, out.records.len());
            prop_assert_eq!(out.changed(), !out.records.is_empty());
        }

        #[test]
        fn zero_rate_leaves_any_sequence_unchanged(
            bytes in dna_seq(200),
            seed in any::<u64>(),
        ) {
            let input = DnaSequence::new(&bytes).unwrap();
            let out = mutate(&input, 0.0, &mut StdRng::seed_from_u64(seed)).unwrap();
            prop_assert!(!out.changed());
            prop_assert!(out.records.is_empty());
            prop_assert_eq!(out.sequence, input);
        }
    }
}
