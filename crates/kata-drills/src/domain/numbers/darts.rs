//! Darts scoring

use crate::constants::DART_RINGS;

/// Points earned by a dart landing at `(x, y)`
///
/// Inner circle (radius 1) scores 10, middle (radius 5) scores 5,
/// outer (radius 10) scores 1, anything beyond scores 0. Landing exactly on
/// a ring line counts for the inner ring.
pub fn score(x: f64, y: f64) -> u8 {
    let [inner, middle, outer] = DART_RINGS;
    let distance = x.hypot(y);

    if distance <= inner {
        10
    } else if distance <= middle {
        5
    } else if distance <= outer {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missed_target() {
        assert_eq!(score(-9.0, 9.0), 0);
    }

    #[test]
    fn test_rings() {
        assert_eq!(score(0.0, 10.0), 1);
        assert_eq!(score(-5.0, 0.0), 5);
        assert_eq!(score(0.0, -1.0), 10);
        assert_eq!(score(0.0, 0.0), 10);
    }

    #[test]
    fn test_near_boundaries() {
        assert_eq!(score(-0.1, -0.1), 10);
        assert_eq!(score(0.7, 0.7), 10);
        assert_eq!(score(0.8, -0.8), 5);
        assert_eq!(score(-3.5, 3.5), 5);
        assert_eq!(score(-3.6, -3.6), 1);
        assert_eq!(score(-7.0, 7.0), 1);
        assert_eq!(score(7.1, -7.1), 0);
    }

    #[test]
    fn test_float_coordinates() {
        assert_eq!(score(0.5, -4.0), 5);
    }
}
