/// Ridge penalty, `lambda * weight^2`.
pub fn l2(weight: f32, lambda: f32) -> f32 {
    lambda * weight.powi(2)
}

/// Lasso penalty, `lambda * |weight|`.
pub fn l1(weight: f32, lambda: f32) -> f32 {
    lambda * weight.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalties_match_their_closed_forms() {
        for w in [-3., -0.5, 0., 0.5, 3.] {
            for lambda in [0., 0.01, 1., 2.5] {
                assert!((l2(w, lambda) - lambda * w * w).abs() < 1e-6);
                assert_eq!(l1(w, lambda), lambda * f32::abs(w));
            }
        }
    }

    #[test]
    fn penalties_vanish_without_weight_or_lambda() {
        assert_eq!(l1(0., 0.7), 0.);
        assert_eq!(l2(0., 0.7), 0.);
        assert_eq!(l1(-4., 0.), 0.);
        assert_eq!(l2(-4., 0.), 0.);
    }

    #[test]
    fn l1_is_symmetric() {
        assert_eq!(l1(-2., 0.1), l1(2., 0.1));
        assert_eq!(l2(-2., 0.1), l2(2., 0.1));
    }
}
