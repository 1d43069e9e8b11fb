//! Exhaustive and randomized property tests
//!
//! ## Test Categories
//!
//! - **Lightweight tests**: Run with `cargo test`
//! - **Heavyweight tests**: Run with `cargo test -- --ignored` (seven-digit
//!   Armstrong brute force)

use kata_drills::domain::numbers::armstrong::{digit_count, is_armstrong_number};
use kata_drills::domain::text::anagram::find_anagrams;
use kata_drills::domain::text::protein_translation::{Codon, Protein, proteins, translate_codon};
use kata_drills::domain::text::rna_transcription::to_rna;
use kata_drills::{SurveyOptions, armstrong_numbers, from_roman, to_roman};
use rand::Rng;
use rand::seq::SliceRandom;

// =============================================================================
// Roman numerals
// =============================================================================

#[test]
fn test_roman_round_trip_all_values() {
    for n in 1..=3999u32 {
        let numeral = to_roman(n).unwrap();
        assert_eq!(from_roman(&numeral), Ok(n), "round trip failed for {n} ({numeral})");
    }
}

#[test]
fn test_roman_numerals_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for n in 1..=3999u32 {
        assert!(seen.insert(to_roman(n).unwrap()));
    }
}

// =============================================================================
// Armstrong numbers
// =============================================================================

/// Digit-power sum computed from the decimal string
fn brute_force_armstrong(n: u64) -> bool {
    let digits = n.to_string();
    let power = digits.len() as u32;
    let sum: u64 = digits
        .bytes()
        .map(|b| ((b - b'0') as u64).pow(power))
        .sum();
    sum == n
}

fn check_armstrong_digits(digits: u32) {
    let lo = 10u64.pow(digits - 1);
    let hi = 10u64.pow(digits) - 1;
    for n in lo..=hi {
        assert_eq!(digit_count(n), digits);
        assert_eq!(is_armstrong_number(n), brute_force_armstrong(n), "mismatch at {n}");
    }
}

#[test]
fn test_armstrong_matches_brute_force_3_to_6_digits() {
    for digits in 3..=6 {
        check_armstrong_digits(digits);
    }
}

#[test]
#[ignore]
fn test_armstrong_matches_brute_force_7_digits() {
    check_armstrong_digits(7);
}

#[test]
fn test_armstrong_survey_matches_brute_force() {
    let expected: Vec<u64> = (100..=999_999).filter(|&n| brute_force_armstrong(n)).collect();
    let found = armstrong_numbers(100..=999_999, SurveyOptions::default());
    assert_eq!(found, expected);
    assert_eq!(found, vec![153, 370, 371, 407, 1634, 8208, 9474, 54748, 92727, 93084, 548834]);
}

// =============================================================================
// Anagrams
// =============================================================================

#[test]
fn test_anagram_random_shuffles_are_found() {
    let mut rng = rand::thread_rng();
    let words = ["listen", "triangle", "Orchestra", "stream", "dormitory"];

    for word in words {
        for _ in 0..20 {
            let mut letters: Vec<char> = word.to_lowercase().chars().collect();
            letters.shuffle(&mut rng);
            let shuffled: String = letters.into_iter().collect();
            let upper = shuffled.to_uppercase();

            let found = find_anagrams(word, &[shuffled.as_str(), upper.as_str()]);
            if shuffled == word.to_lowercase() {
                assert!(found.is_empty(), "{word} matched itself");
            } else {
                assert_eq!(found, vec![shuffled.as_str(), upper.as_str()]);
            }
        }
    }
}

#[test]
fn test_anagram_excludes_identity_in_any_case() {
    assert!(find_anagrams("Banana", &["BANANA", "banana", "Banana"]).is_empty());
}

// =============================================================================
// DNA -> RNA -> protein
// =============================================================================

const CODING_CODONS: [(&str, Protein); 7] = [
    ("AUG", Protein::Methionine),
    ("UUC", Protein::Phenylalanine),
    ("UUA", Protein::Leucine),
    ("UCG", Protein::Serine),
    ("UAU", Protein::Tyrosine),
    ("UGC", Protein::Cysteine),
    ("UGG", Protein::Tryptophan),
];

const STOP_CODONS: [&str; 3] = ["UAA", "UAG", "UGA"];

/// DNA template strand that transcribes to `rna`
fn template_for(rna: &str) -> String {
    rna.chars()
        .map(|base| match base {
            'A' => 'T',
            'U' => 'A',
            'G' => 'C',
            'C' => 'G',
            other => other,
        })
        .collect()
}

#[test]
fn test_random_strands_translate_up_to_stop() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let mut rna = String::new();
        let mut expected = Vec::new();
        for _ in 0..rng.gen_range(0..12) {
            let (codon, protein) = CODING_CODONS[rng.gen_range(0..CODING_CODONS.len())];
            rna.push_str(codon);
            expected.push(protein);
        }
        if rng.gen_bool(0.5) {
            rna.push_str(STOP_CODONS[rng.gen_range(0..STOP_CODONS.len())]);
            rna.push_str("AUGUGG");
        }

        let dna = template_for(&rna);
        assert_eq!(to_rna(&dna), rna);
        assert_eq!(proteins(&to_rna(&dna)), expected, "strand {rna}");
    }
}

#[test]
fn test_every_codon_has_a_known_meaning_or_none() {
    let bases = ['A', 'C', 'G', 'U'];
    let mut coding = 0;
    let mut stops = 0;
    for a in bases {
        for b in bases {
            for c in bases {
                match translate_codon(&format!("{a}{b}{c}")) {
                    Some(Codon::Protein(_)) => coding += 1,
                    Some(Codon::Stop) => stops += 1,
                    None => {}
                }
            }
        }
    }
    assert_eq!(coding, 14);
    assert_eq!(stops, 3);
}
