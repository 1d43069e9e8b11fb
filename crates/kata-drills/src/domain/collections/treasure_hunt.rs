//! Matching treasure records from two different map formats
//!
//! Azara lists a treasure with a two-character coordinate such as `"2A"`.
//! Rui lists a location with the same coordinate split into a digit and an
//! uppercase letter, plus a quadrant colour.

use std::fmt;
use thiserror::Error;

/// Record validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreasureError {
    #[error("coordinate must be exactly 2 characters, found {0:?}")]
    InvalidCoordinate(String),
    #[error("map coordinate must be a digit followed by an uppercase letter, found ({0:?}, {1:?})")]
    InvalidMapCoordinate(char, char),
}

/// Treasure name and compact coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzaraRecord {
    pub treasure: String,
    coordinate: String,
}

impl AzaraRecord {
    pub fn new(treasure: &str, coordinate: &str) -> Result<Self, TreasureError> {
        convert_coordinate(coordinate)?;
        Ok(Self {
            treasure: treasure.to_string(),
            coordinate: coordinate.to_string(),
        })
    }
}

/// Location, split coordinate and quadrant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuiRecord {
    pub location: String,
    coordinate: (char, char),
    pub quadrant: String,
}

impl RuiRecord {
    pub fn new(
        location: &str,
        coordinate: (char, char),
        quadrant: &str,
    ) -> Result<Self, TreasureError> {
        let (digit, letter) = coordinate;
        if !digit.is_ascii_digit() || !letter.is_ascii_uppercase() {
            return Err(TreasureError::InvalidMapCoordinate(digit, letter));
        }
        Ok(Self {
            location: location.to_string(),
            coordinate,
            quadrant: quadrant.to_string(),
        })
    }

    pub fn coordinate(&self) -> (char, char) {
        self.coordinate
    }
}

/// Both records merged after their coordinates matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedRecord {
    pub azara: AzaraRecord,
    pub rui: RuiRecord,
}

/// Quote a string the way a Python `repr` does
fn quoted(s: &str) -> String {
    if s.contains('\'') && !s.contains('"') {
        return format!("\"{s}\"");
    }
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

fn pair(coordinate: (char, char)) -> String {
    format!(
        "({}, {})",
        quoted(&coordinate.0.to_string()),
        quoted(&coordinate.1.to_string())
    )
}

impl fmt::Display for CombinedRecord {
    /// Full five-element tuple form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            quoted(&self.azara.treasure),
            quoted(&self.azara.coordinate),
            quoted(&self.rui.location),
            pair(self.rui.coordinate),
            quoted(&self.rui.quadrant)
        )
    }
}

/// Azara's coordinate string
pub fn get_coordinate(record: &AzaraRecord) -> &str {
    &record.coordinate
}

/// Split a two-character coordinate into its characters
pub fn convert_coordinate(coordinate: &str) -> Result<(char, char), TreasureError> {
    let mut chars = coordinate.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(TreasureError::InvalidCoordinate(coordinate.to_string())),
    }
}

/// Whether both records point at the same spot
pub fn compare_records(azara: &AzaraRecord, rui: &RuiRecord) -> bool {
    convert_coordinate(get_coordinate(azara)).is_ok_and(|coordinate| coordinate == rui.coordinate)
}

/// Merge the records when their coordinates match
pub fn create_record(azara: &AzaraRecord, rui: &RuiRecord) -> Option<CombinedRecord> {
    compare_records(azara, rui).then(|| CombinedRecord {
        azara: azara.clone(),
        rui: rui.clone(),
    })
}

/// One tuple line per record without Azara's coordinate, newline terminated
pub fn clean_up(records: &[CombinedRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "({}, {}, {}, {})\n",
                quoted(&record.azara.treasure),
                quoted(&record.rui.location),
                pair(record.rui.coordinate),
                quoted(&record.rui.quadrant)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn azara(treasure: &str, coordinate: &str) -> AzaraRecord {
        AzaraRecord::new(treasure, coordinate).unwrap()
    }

    fn rui(location: &str, coordinate: (char, char), quadrant: &str) -> RuiRecord {
        RuiRecord::new(location, coordinate, quadrant).unwrap()
    }

    #[test]
    fn test_get_coordinate() {
        assert_eq!(get_coordinate(&azara("Scrimshawed Whale Tooth", "2A")), "2A");
    }

    #[test]
    fn test_convert_coordinate() {
        assert_eq!(convert_coordinate("7E"), Ok(('7', 'E')));
        assert_eq!(
            convert_coordinate("10B"),
            Err(TreasureError::InvalidCoordinate("10B".to_string()))
        );
    }

    #[test]
    fn test_record_validation() {
        assert!(AzaraRecord::new("Glass Starfish", "6").is_err());
        assert_eq!(
            RuiRecord::new("Seaside Cottages", ('C', '1'), "Blue"),
            Err(TreasureError::InvalidMapCoordinate('C', '1'))
        );
        assert!(RuiRecord::new("Seaside Cottages", ('1', 'c'), "Blue").is_err());
    }

    #[test]
    fn test_compare_records() {
        let brass = azara("Brass Spyglass", "4B");
        assert!(compare_records(&brass, &rui("Abandoned Lighthouse", ('4', 'B'), "Blue")));
        assert!(!compare_records(&brass, &rui("Seaside Cottages", ('1', 'C'), "Blue")));
    }

    #[test]
    fn test_create_record() {
        let brass = azara("Brass Spyglass", "4B");
        let lighthouse = rui("Abandoned Lighthouse", ('4', 'B'), "Blue");
        let combined = create_record(&brass, &lighthouse).unwrap();
        assert_eq!(
            combined.to_string(),
            "('Brass Spyglass', '4B', 'Abandoned Lighthouse', ('4', 'B'), 'Blue')"
        );
        assert!(create_record(&brass, &rui("Old Schooner", ('6', 'A'), "Purple")).is_none());
    }

    #[test]
    fn test_clean_up() {
        let records = vec![
            create_record(
                &azara("Brass Spyglass", "4B"),
                &rui("Abandoned Lighthouse", ('4', 'B'), "Blue"),
            )
            .unwrap(),
            create_record(
                &azara("Scrimshawed Whale's Tooth", "2A"),
                &rui("Deserted Docks", ('2', 'A'), "Blue"),
            )
            .unwrap(),
        ];
        assert_eq!(
            clean_up(&records),
            "('Brass Spyglass', 'Abandoned Lighthouse', ('4', 'B'), 'Blue')\n\
             (\"Scrimshawed Whale's Tooth\", 'Deserted Docks', ('2', 'A'), 'Blue')\n"
        );
    }

    #[test]
    fn test_clean_up_empty() {
        assert_eq!(clean_up(&[]), "");
    }
}
