//! "This is the House that Jack Built"
//!
//! Each verse adds one subject and the action linking it to the previous one.

use crate::constants::HOUSE_VERSES;
use thiserror::Error;

/// (subject, what it did to the previous subject)
const PARTS: [(&str, &str); HOUSE_VERSES] = [
    ("house that Jack built.", ""),
    ("malt", "lay in"),
    ("rat", "ate"),
    ("cat", "killed"),
    ("dog", "worried"),
    ("cow with the crumpled horn", "tossed"),
    ("maiden all forlorn", "milked"),
    ("man all tattered and torn", "kissed"),
    ("priest all shaven and shorn", "married"),
    ("rooster that crowed in the morn", "woke"),
    ("farmer sowing his corn", "kept"),
    ("horse and the hound and the horn", "belonged to"),
];

/// Recitation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HouseError {
    /// Verse range empty, reversed or outside 1..=12
    #[error(
        "verses must satisfy 1 <= start <= end <= {max}, found {start}..={end}",
        max = HOUSE_VERSES
    )]
    InvalidRange { start: usize, end: usize },
}

/// Build verse `number` (1-based, at most 12)
pub fn verse(number: usize) -> Option<String> {
    if !(1..=HOUSE_VERSES).contains(&number) {
        return None;
    }

    let (subject, _) = PARTS[number - 1];
    let mut text = format!("This is the {subject}");
    for i in (0..number - 1).rev() {
        let (previous, _) = PARTS[i];
        let (_, action) = PARTS[i + 1];
        text.push_str(&format!(" that {action} the {previous}"));
    }
    Some(text)
}

/// Recite verses `start_verse..=end_verse`
pub fn recite(start_verse: usize, end_verse: usize) -> Result<Vec<String>, HouseError> {
    if start_verse == 0 || end_verse < start_verse || end_verse > HOUSE_VERSES {
        return Err(HouseError::InvalidRange {
            start: start_verse,
            end: end_verse,
        });
    }

    Ok((start_verse..=end_verse).filter_map(verse).collect())
}
