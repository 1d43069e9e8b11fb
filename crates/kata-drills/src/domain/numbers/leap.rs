//! Gregorian leap years

/// Divisible by 4, except centuries not divisible by 400
pub fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_years() {
        assert!(!is_leap_year(2015));
        assert!(!is_leap_year(1970));
    }

    #[test]
    fn test_divisible_by_four() {
        assert!(is_leap_year(1996));
        assert!(is_leap_year(2016));
    }

    #[test]
    fn test_centuries() {
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
    }
}
