//! DNA to RNA transcription

/// Transcribe a DNA strand into its RNA complement
///
/// G→C, C→G, T→A, A→U. Characters that are not DNA nucleotides are copied
/// through unchanged.
pub fn to_rna(dna: &str) -> String {
    dna.chars().map(complement).collect()
}

#[inline]
fn complement(nucleotide: char) -> char {
    match nucleotide {
        'G' => 'C',
        'C' => 'G',
        'T' => 'A',
        'A' => 'U',
        other => other,
    }
}
