#[inline]
pub fn bond_valence(dist: f64, r0: f64, b: f64) -> f64 {
    if dist < 1e-6 {
        return 1e10;
    }
    ((r0 - dist) / b).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn bond_valence_at_reference_distance_is_unity() {
        assert!(f64_approx_equal(bond_valence(1.466, 1.466, 0.37), 1.0));
    }

    #[test]
    fn bond_valence_matches_brown_altermatt_li_o_value() {
        let expected = ((1.466 - 1.0) / 0.37_f64).exp();
        assert!(f64_approx_equal(bond_valence(1.0, 1.466, 0.37), expected));
    }

    #[test]
    fn bond_valence_is_strictly_decreasing_in_distance() {
        let mut previous = bond_valence(0.3, 1.466, 0.37);
        let mut dist = 0.4;
        while dist < 6.0 {
            let current = bond_valence(dist, 1.466, 0.37);
            assert!(current < previous);
            previous = current;
            dist += 0.1;
        }
    }

    #[test]
    fn bond_valence_is_strictly_positive_for_finite_distances() {
        for &dist in &[0.3, 1.0, 2.5, 5.0, 50.0] {
            assert!(bond_valence(dist, 1.466, 0.37) > 0.0);
        }
    }

    #[test]
    fn bond_valence_tends_to_zero_at_large_distance() {
        assert!(bond_valence(100.0, 1.466, 0.37) < 1e-100);
    }

    #[test]
    fn bond_valence_at_degenerate_distance_returns_large_finite_value() {
        let value = bond_valence(1e-7, 1.466, 0.37);
        assert!(f64_approx_equal(value, 1e10));
        assert!(value.is_finite());
    }
}
