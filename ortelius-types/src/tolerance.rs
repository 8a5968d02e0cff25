//! Fixed-tolerance scalar comparisons.
//!
//! All coordinate and angle comparisons in the viewer go through these
//! helpers so that values produced by different code paths compare stable.

/// Comparison tolerance shared by scalar and point equality.
pub const EPSILON: f64 = 0.001;

/// Returns true if the two values differ by less than [`EPSILON`].
pub fn equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Tolerance-padded strict `a < b`.
pub fn less(a: f64, b: f64) -> bool {
    a <= b - EPSILON
}

/// Tolerance-padded strict `a > b`.
pub fn greater(a: f64, b: f64) -> bool {
    less(b, a)
}

/// Solves `a*x² + b*x + c = 0`, returning 0, 1 or 2 roots.
///
/// Degenerates to the linear equation when `a` is (tolerance) zero. When two
/// roots exist the "+" root comes first.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if equal(a, 0.0) {
        if equal(b, 0.0) {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let d = b * b - 4.0 * a * c;
    if equal(d, 0.0) {
        vec![-b / (2.0 * a)]
    } else if d > 0.0 {
        let root = d.sqrt();
        vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        for v in [0.0, 1.0, -273.15, 1e9] {
            assert!(equal(v, v));
        }
        assert!(equal(1.0, 1.0005));
        assert!(!equal(1.0, 1.002));
        assert_eq!(equal(1.0, 1.002), equal(1.002, 1.0));
        assert_eq!(equal(1.0, 1.0005), equal(1.0005, 1.0));
    }

    #[test]
    fn ordering_respects_tolerance() {
        assert!(less(1.0, 1.002));
        assert!(!less(1.0, 1.0005));
        assert!(!less(1.002, 1.0));
        assert!(greater(1.002, 1.0));
        assert!(!greater(1.0005, 1.0));
    }

    #[test]
    fn quadratic_with_two_roots() {
        let roots = solve_quadratic(1.0, -3.0, 2.0);
        assert_eq!(roots.len(), 2);
        assert!(roots.iter().any(|r| equal(*r, 2.0)));
        assert!(roots.iter().any(|r| equal(*r, 1.0)));
    }

    #[test]
    fn quadratic_with_single_root() {
        let roots = solve_quadratic(1.0, 2.0, 1.0);
        assert_eq!(roots, vec![-1.0]);
    }

    #[test]
    fn quadratic_degenerate_cases() {
        assert!(solve_quadratic(0.0, 0.0, 5.0).is_empty());
        assert_eq!(solve_quadratic(0.0, 2.0, -4.0), vec![2.0]);
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_empty());
    }
}
