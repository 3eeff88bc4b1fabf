use std::fmt::Display;

use crate::physics::{
    RefractionOutcome,
    RefractionResult,
};

pub const FORMULA: &str = "n₁ × sin(θ₁) = n₂ × sin(θ₂)";

pub const PHYSICS_RULES: [&str; 4] = [
    "Dense → sparse: the ray bends away from the normal",
    "Sparse → dense: the ray bends toward the normal",
    "Total internal reflection is only possible if n₁ > n₂",
    "Critical angle: θc = arcsin(n₂ / n₁)",
];

/// Format a number with fixed decimals, or as "undefined" if it's not finite.
pub fn format_value(value: f64, decimals: usize) -> FormatValue {
    FormatValue { value, decimals }
}

#[derive(Clone, Copy, Debug)]
pub struct FormatValue {
    pub value: f64,
    pub decimals: usize,
}

impl Display for FormatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_finite() {
            write!(f, "{:.*}", self.decimals, self.value)
        }
        else {
            write!(f, "undefined")
        }
    }
}

/// The formula with the given values substituted, step by step.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationPanel {
    pub formula: &'static str,
    pub given: String,
    pub steps: Vec<String>,
}

impl CalculationPanel {
    pub fn new(result: &RefractionResult) -> Self {
        let input = &result.input;
        let n1 = format_value(input.n1, 2);
        let n2 = format_value(input.n2, 2);
        let theta1 = format_value(input.incidence_angle_degrees, 0);
        let sin_theta2 = format_value(result.sin_theta2, 4);

        let mut steps = vec![
            "sin(θ₂) = (n₁ / n₂) × sin(θ₁)".to_owned(),
            format!("sin(θ₂) = ({n1} / {n2}) × sin({theta1}°)"),
            format!("sin(θ₂) = {sin_theta2}"),
        ];

        if !result.is_defined() {
            steps.push("θ₂ is undefined".to_owned());
        }
        else {
            match result.outcome {
                RefractionOutcome::Refracted { angle_degrees } => {
                    steps.push(format!(
                        "θ₂ = arcsin({sin_theta2}) = {}°",
                        format_value(angle_degrees, 2)
                    ));
                }
                RefractionOutcome::TotalInternalReflection => {
                    steps.push(format!(
                        "|sin(θ₂)| = {} > 1, no real θ₂",
                        format_value(result.sin_theta2.abs(), 4)
                    ));
                }
            }
        }

        Self {
            formula: FORMULA,
            given: format!("n₁ = {n1}   n₂ = {n2}   θ₁ = {theta1}°"),
            steps,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Refraction,
    TotalInternalReflection,
    Undefined,
}

/// What happened, and why.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultPanel {
    pub outcome: Outcome,
    pub headline: String,
    pub details: Vec<String>,
    pub rules: &'static [&'static str],
}

impl ResultPanel {
    pub fn new(result: &RefractionResult) -> Self {
        let input = &result.input;
        let mut details = vec![];

        let (outcome, headline) = if !result.is_defined() {
            details.push(format!(
                "sin(θ₂) = {}",
                format_value(result.sin_theta2, 4)
            ));
            details.push("The refractive indices don't describe a physical boundary".to_owned());
            (Outcome::Undefined, "Undefined configuration".to_owned())
        }
        else {
            match result.outcome {
                RefractionOutcome::TotalInternalReflection => {
                    if let Some(critical) = result.critical_angle_degrees {
                        details.push(format!("Critical angle: {}°", format_value(critical, 1)));
                        details.push(format!(
                            "θ₁ = {}° > {}°",
                            format_value(input.incidence_angle_degrees, 0),
                            format_value(critical, 1)
                        ));
                    }
                    (
                        Outcome::TotalInternalReflection,
                        "Total internal reflection".to_owned(),
                    )
                }
                RefractionOutcome::Refracted { angle_degrees } => {
                    details.push("Normal refraction occurred".to_owned());
                    details.push(bend_direction(input.n1, input.n2).to_owned());
                    if let Some(critical) = result.critical_angle_degrees {
                        details.push(format!("Critical angle: {}°", format_value(critical, 1)));
                    }
                    (
                        Outcome::Refraction,
                        format!("Refraction angle θ₂ = {}°", format_value(angle_degrees, 1)),
                    )
                }
            }
        };

        Self {
            outcome,
            headline,
            details,
            rules: &PHYSICS_RULES,
        }
    }
}

fn bend_direction(n1: f64, n2: f64) -> &'static str {
    if n1 > n2 {
        "The ray bends away from the normal"
    }
    else if n1 < n2 {
        "The ray bends toward the normal"
    }
    else {
        "The ray passes straight through"
    }
}
