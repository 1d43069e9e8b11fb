//! Train wagon lists and routes

use std::collections::BTreeMap;
use thiserror::Error;

/// Locomotive errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocomotiveError {
    /// Fewer ids than the two misplaced wagons plus the locomotive
    #[error("wagon list needs at least 3 ids, found {0}")]
    TooFewWagons(usize),
}

/// Wagon ids as a list
pub fn get_list_of_wagons(ids: &[u32]) -> Vec<u32> {
    ids.to_vec()
}

/// Repair a wagon list
///
/// The first two wagons were moved to the back by mistake and some wagons
/// are missing. The locomotive (third id) goes first, then the missing
/// wagons, the rest, and finally the first two.
pub fn fix_list_of_wagons(
    each_wagons_id: &[u32],
    missing_wagons: &[u32],
) -> Result<Vec<u32>, LocomotiveError> {
    let [first, second, locomotive, rest @ ..] = each_wagons_id else {
        return Err(LocomotiveError::TooFewWagons(each_wagons_id.len()));
    };

    let mut fixed = Vec::with_capacity(each_wagons_id.len() + missing_wagons.len());
    fixed.push(*locomotive);
    fixed.extend_from_slice(missing_wagons);
    fixed.extend_from_slice(rest);
    fixed.extend([*first, *second]);
    Ok(fixed)
}

/// Routing information for a train
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub stops: Vec<String>,
    pub info: BTreeMap<String, String>,
}

impl Route {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            ..Self::default()
        }
    }
}

/// Copy of `route` with the given stops, in order
pub fn add_missing_stops(route: &Route, stops: &[&str]) -> Route {
    Route {
        stops: stops.iter().map(|stop| stop.to_string()).collect(),
        ..route.clone()
    }
}

/// Copy of `route` merged with extra `(key, value)` information
///
/// `from` and `to` keys replace the endpoints; any other key is stored in
/// [`Route::info`], later values winning.
pub fn extend_route_information(route: &Route, more: &[(&str, &str)]) -> Route {
    let mut extended = route.clone();
    for &(key, value) in more {
        match key {
            "from" => extended.from = value.to_string(),
            "to" => extended.to = value.to_string(),
            _ => {
                extended.info.insert(key.to_string(), value.to_string());
            }
        }
    }
    extended
}

/// Transpose depot rows into columns
///
/// Column count is bounded by the shortest row.
pub fn fix_wagon_depot<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let width = rows.iter().map(Vec::len).min().unwrap_or(0);
    (0..width)
        .map(|column| rows.iter().map(|row| row[column].clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_list_of_wagons() {
        assert_eq!(get_list_of_wagons(&[1, 5, 2, 7, 4]), vec![1, 5, 2, 7, 4]);
        assert!(get_list_of_wagons(&[]).is_empty());
    }

    #[test]
    fn test_fix_list_of_wagons() {
        assert_eq!(
            fix_list_of_wagons(&[2, 5, 1, 7, 4, 12, 6, 3, 13], &[3, 17, 6, 15]),
            Ok(vec![1, 3, 17, 6, 15, 7, 4, 12, 6, 3, 13, 2, 5])
        );
    }

    #[test]
    fn test_fix_list_of_wagons_minimal() {
        assert_eq!(fix_list_of_wagons(&[2, 5, 1], &[]), Ok(vec![1, 2, 5]));
        assert_eq!(
            fix_list_of_wagons(&[2, 5], &[8]),
            Err(LocomotiveError::TooFewWagons(2))
        );
    }

    #[test]
    fn test_add_missing_stops() {
        let route = Route::new("New York", "Miami");
        let with_stops = add_missing_stops(&route, &["Washington, DC", "Charlotte", "Atlanta"]);
        assert_eq!(with_stops.from, "New York");
        assert_eq!(with_stops.stops, vec!["Washington, DC", "Charlotte", "Atlanta"]);
        assert!(route.stops.is_empty());
    }

    #[test]
    fn test_extend_route_information() {
        let route = Route::new("Berlin", "Hamburg");
        let info = [("length", "100"), ("speed", "50"), ("to", "Bremen")];
        let extended = extend_route_information(&route, &info);
        assert_eq!(extended.to, "Bremen");
        assert_eq!(extended.info["length"], "100");
        assert_eq!(extended.info["speed"], "50");
    }

    #[test]
    fn test_fix_wagon_depot() {
        let depot = vec![
            vec![(2, "red"), (4, "red"), (8, "red")],
            vec![(5, "blue"), (9, "blue"), (13, "blue")],
            vec![(3, "orange"), (7, "orange"), (11, "orange")],
        ];
        assert_eq!(
            fix_wagon_depot(&depot),
            vec![
                vec![(2, "red"), (5, "blue"), (3, "orange")],
                vec![(4, "red"), (9, "blue"), (7, "orange")],
                vec![(8, "red"), (13, "blue"), (11, "orange")],
            ]
        );
    }

    #[test]
    fn test_fix_wagon_depot_ragged() {
        let depot = vec![vec![1, 2, 3], vec![4, 5]];
        assert_eq!(fix_wagon_depot(&depot), vec![vec![1, 4], vec![2, 5]]);
        assert!(fix_wagon_depot::<u32>(&[]).is_empty());
    }
}
