use std::ops::RangeInclusive;

use crate::physics::RefractionInput;

/// Default value and allowed range of one input control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRange {
    pub default: f64,
    pub min: f64,
    pub max: f64,
}

impl ControlRange {
    pub fn range(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }

    /// Clamps `value` into the range.
    ///
    /// NaN can't be clamped and yields `fallback` instead.
    pub fn clamp_or(&self, value: f64, fallback: f64) -> f64 {
        if value.is_nan() {
            fallback
        }
        else {
            value.clamp(self.min, self.max)
        }
    }
}

pub const INCIDENCE_ANGLE: ControlRange = ControlRange {
    default: RefractionInput::DEFAULT.incidence_angle_degrees,
    min: 5.0,
    max: 85.0,
};

pub const N1: ControlRange = ControlRange {
    default: RefractionInput::DEFAULT.n1,
    min: 1.0,
    max: 3.0,
};

pub const N2: ControlRange = ControlRange {
    default: RefractionInput::DEFAULT.n2,
    min: 1.0,
    max: 3.0,
};

/// Clamps all three values of `input` to their control ranges.
pub fn clamp_input(input: RefractionInput) -> RefractionInput {
    RefractionInput {
        incidence_angle_degrees: INCIDENCE_ANGLE
            .clamp_or(input.incidence_angle_degrees, INCIDENCE_ANGLE.default),
        n1: N1.clamp_or(input.n1, N1.default),
        n2: N2.clamp_or(input.n2, N2.default),
    }
}

/// Fixed pairs of media offered as one-click actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::VariantArray, strum::Display)]
pub enum QuickPreset {
    #[strum(to_string = "Air → Water")]
    AirToWater,
    #[strum(to_string = "Water → Air")]
    WaterToAir,
    #[strum(to_string = "Glass → Air")]
    GlassToAir,
}

impl QuickPreset {
    /// `(n1, n2)`
    pub fn indices(&self) -> (f64, f64) {
        match self {
            QuickPreset::AirToWater => (1.00, 1.33),
            QuickPreset::WaterToAir => (1.33, 1.00),
            QuickPreset::GlassToAir => (1.52, 1.00),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_clamps_to_range() {
        assert_eq!(INCIDENCE_ANGLE.clamp_or(0.0, 30.0), 5.0);
        assert_eq!(INCIDENCE_ANGLE.clamp_or(90.0, 30.0), 85.0);
        assert_eq!(INCIDENCE_ANGLE.clamp_or(42.5, 30.0), 42.5);
        assert_eq!(N1.clamp_or(f64::INFINITY, 1.0), 3.0);
        assert_eq!(N2.clamp_or(f64::NEG_INFINITY, 1.0), 1.0);
        assert_eq!(N2.clamp_or(f64::NAN, 1.7), 1.7);
    }

    #[test]
    fn defaults_are_inside_ranges() {
        for control in [INCIDENCE_ANGLE, N1, N2] {
            assert!(control.range().contains(&control.default));
        }
    }

    #[test]
    fn clamp_input_keeps_valid_input() {
        let input = RefractionInput::new(60.0, 1.52, 1.0);
        assert_eq!(clamp_input(input), input);
        assert_eq!(
            clamp_input(RefractionInput::new(95.0, 0.5, 0.0)),
            RefractionInput::new(85.0, 1.0, 1.0)
        );
    }
}
