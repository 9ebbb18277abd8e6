//! Plain-text rendering of command results.

use std::fmt::{Display, Write};

use biosynth_core::hash::short_sha256;
use biosynth_seq::{ProteinSequence, SimulationReport, SpliceMap, SpliceRegion, Translation, VariantComparison};

fn line(out: &mut String, label: &str, value: impl Display) {
    let _ = writeln!(out, "{:<15}{}", format!("{label}:"), value);
}

fn protein_mass(out: &mut String, protein: &ProteinSequence) {
    if !protein.is_empty() {
        line(out, "Mass", format!("{:.2} Da", protein.molecular_weight()));
    }
}

fn regions(out: &mut String, title: &str, regions: &[SpliceRegion]) {
    if regions.is_empty() {
        let _ = writeln!(out, "{title}: none");
        return;
    }
    let _ = writeln!(out, "{title}:");
    for (idx, region) in regions.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {} {} (positions {}-{}): {}",
            title.trim_end_matches('s'),
            idx + 1,
            region.start,
            region.end,
            region.sequence
        );
    }
}

pub fn render_simulation(report: &SimulationReport) -> String {
    let mut out = String::new();
    line(&mut out, "Input", &report.input);
    line(&mut out, "Original DNA", &report.original_dna);
    line(&mut out, "Digest", short_sha256(&report.original_dna, 12));
    line(&mut out, "Mutated DNA", &report.mutated_dna);
    line(&mut out, "Mutations", report.mutations.len());
    for record in &report.mutations {
        let class = report
            .effects
            .iter()
            .find(|e| e.position == record.position)
            .map_or_else(|| "partial codon".to_string(), |e| format!("{:?}", e.class));
        let _ = writeln!(
            out,
            "  {} {} -> {} ({:?}, {})",
            record.position,
            record.original,
            record.mutated,
            record.kind(),
            class
        );
    }
    regions(&mut out, "Introns", &report.introns);
    regions(&mut out, "Exons", &report.exons);
    line(&mut out, "Coding DNA", &report.coding_dna);
    line(&mut out, "RNA", &report.rna);
    line(&mut out, "Protein", &report.protein);
    protein_mass(&mut out, &report.protein);
    line(&mut out, "Stop codon", if report.stop_seen { "yes" } else { "no" });
    line(&mut out, "Starts ATG", if report.starts_with_start_codon { "yes" } else { "no" });
    line(&mut out, "GC content", format!("{:.2}%", report.gc_content * 100.0));
    out.trim_end().to_string()
}

pub fn render_splice_map(map: &SpliceMap) -> String {
    let mut out = String::new();
    regions(&mut out, "Introns", &map.introns);
    regions(&mut out, "Exons", &map.exons);
    line(&mut out, "Spliced", map.spliced());
    out.trim_end().to_string()
}

pub fn render_translation(translation: &Translation) -> String {
    let mut out = String::new();
    line(&mut out, "Protein", &translation.protein);
    protein_mass(&mut out, &translation.protein);
    line(&mut out, "Stop codon", if translation.stop_seen { "yes" } else { "no" });
    let names = translation.protein.residue_names().join("-");
    if !names.is_empty() {
        line(&mut out, "Residues", names);
    }
    out.trim_end().to_string()
}

pub fn render_comparison(comparison: &VariantComparison) -> String {
    let mut out = String::new();
    line(&mut out, "Reference", format!("{} bp", comparison.reference_len));
    line(&mut out, "Variant", format!("{} bp", comparison.variant_len));
    line(&mut out, "SNPs", comparison.snps.len());
    line(&mut out, "Transitions", comparison.transitions);
    line(&mut out, "Transversions", comparison.transversions);
    if let Some(ratio) = comparison.ts_tv_ratio() {
        line(&mut out, "Ts/Tv", format!("{ratio:.2}"));
    }
    for snp in &comparison.snps {
        let _ = writeln!(
            out,
            "  {} {} -> {} ({:?})",
            snp.position, snp.reference, snp.variant, snp.kind
        );
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosynth_seq::{simulate, DnaSequence, RnaSequence, SimulationConfig};

    #[test]
    fn label_column_is_aligned() {
        let mut out = String::new();
        line(&mut out, "RNA", "AUG");
        assert_eq!(out, "RNA:           AUG\n");
    }

    #[test]
    fn simulation_report_lists_every_stage() {
        let config = SimulationConfig {
            prepend_start_codon: true,
            ..Default::default()
        };
        let report = simulate("gtag", &config).unwrap();
        let text = render_simulation(&report);
        assert!(text.contains("Original DNA:  ATGGTAG"));
        assert!(text.contains("Intron 1 (positions 3-7): GTAG"));
        assert!(text.contains("Exon 1 (positions 0-3): ATG"));
        assert!(text.contains("Protein:       M"));
        assert!(text.contains("Starts ATG:    yes"));
    }

    #[test]
    fn empty_regions_say_none() {
        let map = SpliceMap::scan(&DnaSequence::new(b"ACCA").unwrap());
        let text = render_splice_map(&map);
        assert!(text.contains("Introns: none"));
        assert!(text.contains("Spliced:       ACCA"));
    }

    #[test]
    fn translation_lists_residue_names() {
        let translation = RnaSequence::new(b"AUGUUUUAA").unwrap().translate();
        let text = render_translation(&translation);
        assert!(text.contains("Residues:      Methionine-Phenylalanine"));
        assert!(text.contains("Stop codon:    yes"));
        let mass = translation.protein.molecular_weight();
        assert!(text.contains(&format!("Mass:          {mass:.2} Da")));
    }

    #[test]
    fn simulation_digest_is_shortened() {
        let report = simulate("Hi DNA", &SimulationConfig::default()).unwrap();
        let text = render_simulation(&report);
        assert!(text.contains(&format!("Digest:        {}", &report.digest[..12])));
    }

    #[test]
    fn empty_protein_has_no_mass() {
        let translation = RnaSequence::new(b"UAA").unwrap().translate();
        assert!(!render_translation(&translation).contains("Mass:"));
    }

    #[test]
    fn comparison_lists_snps() {
        let cmp = VariantComparison::new(
            &DnaSequence::new(b"ACGT").unwrap(),
            &DnaSequence::new(b"GCGA").unwrap(),
        );
        let text = render_comparison(&cmp);
        assert!(text.contains("  0 A -> G (Transition)"));
        assert!(text.contains("  3 T -> A (Transversion)"));
        assert!(text.contains("Ts/Tv:         1.00"));
    }
}
