//! Pangram check for the English alphabet

/// Check whether `sentence` uses every letter a-z at least once
pub fn is_pangram(sentence: &str) -> bool {
    let mut seen = 0u32;
    for b in sentence.bytes().filter(u8::is_ascii_alphabetic) {
        seen |= 1 << (b.to_ascii_lowercase() - b'a');
    }
    seen == (1 << 26) - 1
}
