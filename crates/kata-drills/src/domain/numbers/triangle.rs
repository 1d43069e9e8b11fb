//! Triangle classification

/// Three side lengths
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    sides: [f64; 3],
}

impl Triangle {
    /// Create a triangle, returning `None` when the sides cannot form one
    ///
    /// Every side must be positive and the sum of any two sides must be at
    /// least the third (degenerate triangles are accepted).
    pub fn new(sides: [f64; 3]) -> Option<Self> {
        is_triangle(sides).then_some(Self { sides })
    }

    /// Side lengths as given
    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }

    /// Number of distinct side lengths
    fn distinct_sides(&self) -> usize {
        let [a, b, c] = self.sides;
        match (a == b, b == c, a == c) {
            (true, true, _) => 1,
            (false, false, false) => 3,
            _ => 2,
        }
    }

    /// All three sides equal
    pub fn is_equilateral(&self) -> bool {
        self.distinct_sides() == 1
    }

    /// At least two sides equal
    pub fn is_isosceles(&self) -> bool {
        self.distinct_sides() <= 2
    }

    /// All sides different
    pub fn is_scalene(&self) -> bool {
        self.distinct_sides() == 3
    }
}

/// Check whether `sides` can form a triangle
pub fn is_triangle(sides: [f64; 3]) -> bool {
    let [a, b, c] = sides;
    sides.iter().all(|&s| s.is_finite() && s > 0.0) && a + b >= c && b + c >= a && a + c >= b
}

/// Valid triangle with all sides equal
pub fn equilateral(sides: [f64; 3]) -> bool {
    Triangle::new(sides).is_some_and(|t| t.is_equilateral())
}

/// Valid triangle with at least two sides equal
pub fn isosceles(sides: [f64; 3]) -> bool {
    Triangle::new(sides).is_some_and(|t| t.is_isosceles())
}

/// Valid triangle with all sides different
pub fn scalene(sides: [f64; 3]) -> bool {
    Triangle::new(sides).is_some_and(|t| t.is_scalene())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equilateral() {
        assert!(equilateral([2.0, 2.0, 2.0]));
        assert!(equilateral([0.5, 0.5, 0.5]));
        assert!(!equilateral([2.0, 3.0, 2.0]));
        assert!(!equilateral([0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_isosceles() {
        assert!(isosceles([3.0, 4.0, 4.0]));
        assert!(isosceles([4.0, 3.0, 4.0]));
        assert!(isosceles([4.0, 4.0, 4.0]));
        assert!(!isosceles([2.0, 3.0, 4.0]));
        assert!(!isosceles([1.0, 1.0, 3.0]));
    }

    #[test]
    fn test_scalene() {
        assert!(scalene([5.0, 4.0, 6.0]));
        assert!(scalene([0.5, 0.4, 0.6]));
        assert!(!scalene([4.0, 4.0, 4.0]));
        assert!(!scalene([7.0, 3.0, 2.0]));
    }

    #[test]
    fn test_degenerate_triangle_allowed() {
        assert!(is_triangle([1.0, 1.0, 2.0]));
    }

    #[test]
    fn test_invalid_sides() {
        assert!(Triangle::new([-1.0, 2.0, 2.0]).is_none());
        assert!(Triangle::new([f64::NAN, 1.0, 1.0]).is_none());
    }

    #[test]
    fn test_sides_accessor() {
        let t = Triangle::new([3.0, 4.0, 5.0]).unwrap();
        assert_eq!(t.sides(), [3.0, 4.0, 5.0]);
        assert!(t.is_scalene());
    }
}
