//! String drills: ciphers, word games, sequence translation and a small parser

pub mod anagram;
pub mod bob;
pub mod house;
pub mod isbn;
pub mod isogram;
pub mod pangram;
pub mod protein_translation;
pub mod reverse;
pub mod rna_transcription;
pub mod rotational_cipher;
pub mod vocab;
pub mod wordy;
