//! Concrete [`Stage`]s for turning free text into DNA.
//!
//! Every stage is a unit struct with no state. The base conversion is a
//! fixed lookup table, so the same character always becomes the same base.

use crate::pipeline::Stage;

/// Character-to-base table for ASCII, indexed by code point.
///
/// Rows cover eight code points each. The cycle `T A C G` is anchored so
/// that letters follow their position in the alphabet: `A`/`a` map to `A`,
/// `B`/`b` to `C`, `C`/`c` to `G`, `D`/`d` to `T`, and so on. Space (0x20)
/// maps to `T`, digits `0`-`9` to `TACGTACGTA`.
pub const BASE_TABLE: &[u8; 128] = b"\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG\
    TACGTACG";

/// Map any character to a DNA base.
///
/// ASCII goes through [`BASE_TABLE`]; everything else is folded onto it by
/// code point modulo 128.
pub fn base_for(c: char) -> u8 {
    BASE_TABLE[(c as u32 % 128) as usize]
}

/// Uppercases every letter; other characters pass through.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterCapitalizer;

impl Stage for CharacterCapitalizer {
    fn name(&self) -> &'static str {
        "character-capitalizer"
    }

    fn transform(&self, text: &str) -> String {
        text.chars().flat_map(char::to_uppercase).collect()
    }
}

/// Replaces every character with one base from [`BASE_TABLE`].
///
/// Output has exactly one base per input character.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnaBaseConverter;

impl Stage for DnaBaseConverter {
    fn name(&self) -> &'static str {
        "dna-base-converter"
    }

    fn transform(&self, text: &str) -> String {
        text.chars().map(|c| base_for(c) as char).collect()
    }
}

/// Deletes whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceRemover;

impl Stage for SpaceRemover {
    fn name(&self) -> &'static str {
        "space-remover"
    }

    fn transform(&self, text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

/// Deletes anything that is not `A`, `C`, `G` or `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialCharactersRemover;

impl Stage for SpecialCharactersRemover {
    fn name(&self) -> &'static str {
        "special-characters-remover"
    }

    fn transform(&self, text: &str) -> String {
        text.chars()
            .filter(|c| matches!(c, 'A' | 'C' | 'G' | 'T'))
            .collect()
    }
}
