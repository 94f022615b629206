// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Move `value` toward zero by `step` without crossing it
pub fn approach_zero(value: f32, step: f32) -> f32 {
    if value > 0.0 {
        (value - step).max(0.0)
    } else if value < 0.0 {
        (value + step).min(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15, 0, 10), 10);
    }

    #[test]
    fn test_approach_zero_from_both_sides() {
        assert_abs_diff_eq!(approach_zero(1.0, 0.4), 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(approach_zero(-1.0, 0.4), -0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_approach_zero_does_not_overshoot() {
        assert_eq!(approach_zero(0.3, 0.4), 0.0);
        assert_eq!(approach_zero(-0.3, 0.4), 0.0);
        assert_eq!(approach_zero(0.0, 0.4), 0.0);
    }
}
