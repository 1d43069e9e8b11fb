//! Raindrop sounds for the factors 3, 5 and 7

const DROPS: [(u64, &str); 3] = [(3, "Pling"), (5, "Plang"), (7, "Plong")];

/// Raindrop sounds for `number`, or the number itself when none apply
pub fn convert(number: u64) -> String {
    let sounds: String = DROPS
        .iter()
        .filter(|(factor, _)| number % factor == 0)
        .map(|(_, sound)| *sound)
        .collect();

    if sounds.is_empty() {
        number.to_string()
    } else {
        sounds
    }
}
