//! RNA to protein translation
//!
//! Codons are read three bases at a time. Unknown codons are skipped, a
//! trailing partial codon is ignored and a STOP codon ends translation.

use crate::constants::CODON_LENGTH;
use std::fmt;

/// Amino acids produced by the supported codons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Protein {
    Methionine,
    Phenylalanine,
    Leucine,
    Serine,
    Tyrosine,
    Cysteine,
    Tryptophan,
}

impl Protein {
    /// Protein name as written in the codon table
    pub fn name(self) -> &'static str {
        match self {
            Self::Methionine => "Methionine",
            Self::Phenylalanine => "Phenylalanine",
            Self::Leucine => "Leucine",
            Self::Serine => "Serine",
            Self::Tyrosine => "Tyrosine",
            Self::Cysteine => "Cysteine",
            Self::Tryptophan => "Tryptophan",
        }
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Meaning of a single codon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codon {
    Protein(Protein),
    Stop,
}

/// Look up a codon in the translation table
pub fn translate_codon(codon: &str) -> Option<Codon> {
    use Protein::{Cysteine, Leucine, Methionine, Phenylalanine, Serine, Tryptophan, Tyrosine};

    let protein = match codon {
        "AUG" => Methionine,
        "UUU" | "UUC" => Phenylalanine,
        "UUA" | "UUG" => Leucine,
        "UCU" | "UCC" | "UCA" | "UCG" => Serine,
        "UAU" | "UAC" => Tyrosine,
        "UGU" | "UGC" => Cysteine,
        "UGG" => Tryptophan,
        "UAA" | "UAG" | "UGA" => return Some(Codon::Stop),
        _ => return None,
    };
    Some(Codon::Protein(protein))
}

/// Translate an RNA strand into the proteins it encodes
pub fn proteins(strand: &str) -> Vec<Protein> {
    let bases: Vec<char> = strand.chars().collect();
    let mut sequence = Vec::with_capacity(bases.len() / CODON_LENGTH);
    let mut codon = String::with_capacity(CODON_LENGTH);

    for chunk in bases.chunks_exact(CODON_LENGTH) {
        codon.clear();
        codon.extend(chunk);

        match translate_codon(&codon) {
            Some(Codon::Protein(protein)) => sequence.push(protein),
            Some(Codon::Stop) => break,
            None => continue,
        }
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strand() {
        assert!(proteins("").is_empty());
    }

    #[test]
    fn test_single_codons() {
        assert_eq!(proteins("AUG"), vec![Protein::Methionine]);
        assert_eq!(proteins("UUC"), vec![Protein::Phenylalanine]);
        assert_eq!(proteins("UCG"), vec![Protein::Serine]);
        assert_eq!(proteins("UGG"), vec![Protein::Tryptophan]);
    }

    #[test]
    fn test_sequence_of_codons() {
        assert_eq!(
            proteins("AUGUUUUGG"),
            vec![Protein::Methionine, Protein::Phenylalanine, Protein::Tryptophan]
        );
    }

    #[test]
    fn test_stop_codon_ends_translation() {
        assert!(proteins("UAG").is_empty());
        assert_eq!(
            proteins("UGGUGUUAUUAAUGGUUU"),
            vec![Protein::Tryptophan, Protein::Cysteine, Protein::Tyrosine]
        );
    }

    #[test]
    fn test_unknown_codon_skipped() {
        assert_eq!(proteins("XYZAUG"), vec![Protein::Methionine]);
    }

    #[test]
    fn test_incomplete_trailing_codon_ignored() {
        assert_eq!(proteins("AUGUU"), vec![Protein::Methionine]);
    }

    #[test]
    fn test_translate_codon_table() {
        assert_eq!(translate_codon("UGA"), Some(Codon::Stop));
        assert_eq!(translate_codon("UUA"), Some(Codon::Protein(Protein::Leucine)));
        assert_eq!(translate_codon("AAA"), None);
    }

    #[test]
    fn test_protein_display() {
        assert_eq!(Protein::Cysteine.to_string(), "Cysteine");
    }
}
