//! Snell's law evaluation for a ray crossing a flat boundary.
//!
//! `n1 * sin(theta1) = n2 * sin(theta2)`

use serde::{
    Deserialize,
    Serialize,
};

/// The three values a refraction is computed from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefractionInput {
    /// Angle between incoming ray and boundary normal, in degrees.
    pub incidence_angle_degrees: f64,

    /// Refractive index of the medium the ray comes from.
    pub n1: f64,

    /// Refractive index of the medium the ray enters.
    pub n2: f64,
}

impl RefractionInput {
    /// Air to water at 30°.
    pub const DEFAULT: Self = Self {
        incidence_angle_degrees: 30.0,
        n1: 1.00,
        n2: 1.33,
    };

    pub fn new(incidence_angle_degrees: f64, n1: f64, n2: f64) -> Self {
        Self {
            incidence_angle_degrees,
            n1,
            n2,
        }
    }
}

impl Default for RefractionInput {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What happens to the ray at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RefractionOutcome {
    Refracted { angle_degrees: f64 },
    TotalInternalReflection,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefractionResult {
    pub input: RefractionInput,

    /// `(n1 / n2) * sin(theta1)`, as computed. This is not clamped to [-1, 1].
    pub sin_theta2: f64,

    pub outcome: RefractionOutcome,

    /// Only present if `n1 > n2`.
    pub critical_angle_degrees: Option<f64>,
}

impl RefractionResult {
    pub fn has_total_internal_reflection(&self) -> bool {
        matches!(self.outcome, RefractionOutcome::TotalInternalReflection)
    }

    pub fn refraction_angle_degrees(&self) -> Option<f64> {
        match self.outcome {
            RefractionOutcome::Refracted { angle_degrees } => Some(angle_degrees),
            RefractionOutcome::TotalInternalReflection => None,
        }
    }

    /// Whether every computed number is finite.
    ///
    /// A zero `n2`, or indices outside the physical range, make `sin_theta2`
    /// infinite or NaN. Such a result has no meaningful geometry.
    pub fn is_defined(&self) -> bool {
        self.sin_theta2.is_finite()
            && self.refraction_angle_degrees().is_none_or(f64::is_finite)
            && self.critical_angle_degrees.is_none_or(f64::is_finite)
    }
}

pub fn compute_refraction(input: RefractionInput) -> RefractionResult {
    let RefractionInput {
        incidence_angle_degrees,
        n1,
        n2,
    } = input;

    let theta1 = incidence_angle_degrees.to_radians();
    let sin_theta2 = n1 * theta1.sin() / n2;

    let critical_angle_degrees = (n1 > n2).then(|| (n2 / n1).asin().to_degrees());

    let outcome = if sin_theta2.abs() > 1.0 {
        RefractionOutcome::TotalInternalReflection
    }
    else {
        RefractionOutcome::Refracted {
            angle_degrees: sin_theta2.asin().to_degrees(),
        }
    };

    RefractionResult {
        input,
        sin_theta2,
        outcome,
        critical_angle_degrees,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn sample_inputs() -> impl Iterator<Item = RefractionInput> {
        (5..=85).step_by(5).flat_map(|angle| {
            (0..=40).flat_map(move |i| {
                (0..=40).map(move |j| {
                    RefractionInput::new(
                        angle as f64,
                        1.0 + i as f64 * 0.05,
                        1.0 + j as f64 * 0.05,
                    )
                })
            })
        })
    }

    #[test]
    fn air_to_water_at_30_degrees() {
        let result = compute_refraction(RefractionInput::new(30.0, 1.00, 1.33));

        assert_abs_diff_eq!(result.sin_theta2, 0.3759, epsilon = 1e-4);
        assert_abs_diff_eq!(
            result.refraction_angle_degrees().unwrap(),
            22.08,
            epsilon = 0.01
        );
        assert!(!result.has_total_internal_reflection());
        assert_eq!(result.critical_angle_degrees, None);
    }

    #[test]
    fn glass_to_air_at_60_degrees_reflects_totally() {
        let result = compute_refraction(RefractionInput::new(60.0, 1.52, 1.00));

        assert_abs_diff_eq!(
            result.critical_angle_degrees.unwrap(),
            41.14,
            epsilon = 0.01
        );
        assert!(result.has_total_internal_reflection());
        assert_eq!(result.refraction_angle_degrees(), None);
    }

    #[test]
    fn glass_to_air_below_critical_angle_refracts() {
        let result = compute_refraction(RefractionInput::new(30.0, 1.52, 1.00));

        assert!(result.critical_angle_degrees.unwrap() > 30.0);
        assert!(!result.has_total_internal_reflection());
        assert_abs_diff_eq!(
            result.refraction_angle_degrees().unwrap(),
            49.46,
            epsilon = 0.01
        );
    }

    #[test]
    fn equal_indices_do_not_bend() {
        for angle in [1.0, 5.0, 30.0, 45.0, 60.0, 85.0, 89.0] {
            let result = compute_refraction(RefractionInput::new(angle, 1.5, 1.5));

            assert_abs_diff_eq!(
                result.refraction_angle_degrees().unwrap(),
                angle,
                epsilon = 1e-9
            );
            assert_eq!(result.critical_angle_degrees, None);
        }
    }

    #[test]
    fn it_is_deterministic() {
        for input in sample_inputs() {
            let a = compute_refraction(input);
            let b = compute_refraction(input);

            assert_eq!(a.sin_theta2.to_bits(), b.sin_theta2.to_bits());
            assert_eq!(
                a.refraction_angle_degrees().map(f64::to_bits),
                b.refraction_angle_degrees().map(f64::to_bits)
            );
            assert_eq!(
                a.critical_angle_degrees.map(f64::to_bits),
                b.critical_angle_degrees.map(f64::to_bits)
            );
        }
    }

    #[test]
    fn outcome_matches_sine_magnitude() {
        for input in sample_inputs() {
            let result = compute_refraction(input);
            assert_eq!(
                result.has_total_internal_reflection(),
                result.sin_theta2.abs() > 1.0
            );
            assert_ne!(
                result.has_total_internal_reflection(),
                result.refraction_angle_degrees().is_some()
            );
        }
    }

    #[test]
    fn total_internal_reflection_implies_critical_angle() {
        for input in sample_inputs() {
            let result = compute_refraction(input);
            if result.has_total_internal_reflection() {
                let critical = result.critical_angle_degrees.unwrap();
                assert!(input.incidence_angle_degrees > critical - 1e-9);
            }
        }
    }

    #[test]
    fn critical_angle_only_from_dense_to_sparse() {
        for input in sample_inputs() {
            let result = compute_refraction(input);
            assert_eq!(result.critical_angle_degrees.is_some(), input.n1 > input.n2);
        }
    }

    #[test]
    fn zero_n2_is_undefined() {
        let result = compute_refraction(RefractionInput::new(30.0, 1.0, 0.0));
        assert!(result.sin_theta2.is_infinite());
        assert!(!result.is_defined());

        let result = compute_refraction(RefractionInput::new(30.0, 0.0, 0.0));
        assert!(result.sin_theta2.is_nan());
        assert!(!result.is_defined());
    }

    #[test]
    fn default_input_is_defined() {
        let result = compute_refraction(RefractionInput::default());
        assert!(result.is_defined());
    }
}
