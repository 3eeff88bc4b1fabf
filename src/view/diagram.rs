//! Geometry of the ray diagram.
//!
//! The boundary lies on the x axis and the normal on the y axis. Medium 1 is
//! the upper half plane, medium 2 the lower one. Angles of arcs are measured
//! counter-clockwise from the positive x axis, in degrees.

use nalgebra::{
    Point2,
    Vector2,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    physics::{
        RefractionOutcome,
        RefractionResult,
    },
    view::panels::format_value,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// Half width of the visible area.
    #[serde(default = "default_extent")]
    pub extent: f64,

    #[serde(default = "default_ray_length")]
    pub ray_length: f64,

    #[serde(default = "default_incidence_arc_radius")]
    pub incidence_arc_radius: f64,

    #[serde(default = "default_reflection_arc_radius")]
    pub reflection_arc_radius: f64,

    #[serde(default = "default_refraction_arc_radius")]
    pub refraction_arc_radius: f64,

    /// Distance of angle labels from their arc.
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,

    #[serde(default = "default_arc_segments")]
    pub arc_segments: usize,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            extent: default_extent(),
            ray_length: default_ray_length(),
            incidence_arc_radius: default_incidence_arc_radius(),
            reflection_arc_radius: default_reflection_arc_radius(),
            refraction_arc_radius: default_refraction_arc_radius(),
            label_offset: default_label_offset(),
            arc_segments: default_arc_segments(),
        }
    }
}

fn default_extent() -> f64 {
    150.0
}

fn default_ray_length() -> f64 {
    100.0
}

fn default_incidence_arc_radius() -> f64 {
    40.0
}

fn default_reflection_arc_radius() -> f64 {
    50.0
}

fn default_refraction_arc_radius() -> f64 {
    60.0
}

fn default_label_offset() -> f64 {
    15.0
}

fn default_arc_segments() -> usize {
    50
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Segment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutgoingRay {
    Refracted(Segment),
    Reflected(Segment),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleKind {
    Incidence,
    Reflection,
    Refraction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AngleArc {
    pub kind: AngleKind,
    pub points: Vec<Point2<f64>>,
    pub label_position: Point2<f64>,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CriticalAnnotation {
    pub line: Segment,
    pub label_position: Point2<f64>,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediumLabel {
    pub position: Point2<f64>,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RayDiagram {
    pub incident: Segment,
    pub outgoing: OutgoingRay,
    pub arcs: Vec<AngleArc>,
    pub critical: Option<CriticalAnnotation>,
    pub media: [MediumLabel; 2],

    /// Position of the "total internal reflection" banner, if shown.
    pub total_internal_reflection: Option<Point2<f64>>,
}

impl RayDiagram {
    /// Lays out the diagram for a result.
    ///
    /// Returns `None` if the result has no finite geometry.
    pub fn new(result: &RefractionResult, config: &DiagramConfig) -> Option<Self> {
        if !result.is_defined() {
            return None;
        }

        let origin = Point2::origin();
        let length = config.ray_length;
        let theta1 = result.input.incidence_angle_degrees;

        // points from the origin into medium 1, on the incident side of the normal
        let incident_direction = from_normal(theta1);
        let incident = Segment::new(origin + incident_direction * length, origin);

        let mut arcs = vec![angle_arc(
            config,
            AngleKind::Incidence,
            config.incidence_arc_radius,
            90.0,
            90.0 + theta1,
            format!("θ₁ = {}°", format_value(theta1, 0)),
        )];

        let (outgoing, total_internal_reflection) = match result.outcome {
            RefractionOutcome::Refracted { angle_degrees } => {
                let direction = -from_normal(angle_degrees);
                arcs.push(angle_arc(
                    config,
                    AngleKind::Refraction,
                    config.refraction_arc_radius,
                    -90.0,
                    -90.0 + angle_degrees,
                    format!("θ₂ = {}°", format_value(angle_degrees, 0)),
                ));
                (
                    OutgoingRay::Refracted(Segment::new(origin, origin + direction * length)),
                    None,
                )
            }
            RefractionOutcome::TotalInternalReflection => {
                // mirror of the incident ray about the normal
                let direction = from_normal(-theta1);
                arcs.push(angle_arc(
                    config,
                    AngleKind::Reflection,
                    config.reflection_arc_radius,
                    90.0 - theta1,
                    90.0,
                    format!("θr = {}°", format_value(theta1, 0)),
                ));
                (
                    OutgoingRay::Reflected(Segment::new(origin, origin + direction * length)),
                    Some(Point2::new(0.0, -0.8 * length)),
                )
            }
        };

        let critical = result.critical_angle_degrees.map(|critical| {
            let direction = from_normal(critical);
            let end = origin + direction * length;
            CriticalAnnotation {
                line: Segment::new(origin, end),
                label_position: end + direction * config.label_offset,
                label: format!("θc = {}°", format_value(critical, 1)),
            }
        });

        let corner = config.extent - 0.2 * config.extent;
        let media = [
            MediumLabel {
                position: Point2::new(-corner, corner),
                text: format!("Medium 1\nn₁ = {}", format_value(result.input.n1, 2)),
            },
            MediumLabel {
                position: Point2::new(-corner, -corner),
                text: format!("Medium 2\nn₂ = {}", format_value(result.input.n2, 2)),
            },
        ];

        Some(Self {
            incident,
            outgoing,
            arcs,
            critical,
            media,
            total_internal_reflection,
        })
    }
}

/// Unit vector pointing into the upper half plane, `angle` degrees from the
/// normal towards the negative x axis.
fn from_normal(angle: f64) -> Vector2<f64> {
    let angle = angle.to_radians();
    Vector2::new(-angle.sin(), angle.cos())
}

fn angle_arc(
    config: &DiagramConfig,
    kind: AngleKind,
    radius: f64,
    start: f64,
    end: f64,
    label: String,
) -> AngleArc {
    let segments = config.arc_segments.max(1);
    let points = (0..=segments)
        .map(|i| {
            let angle = (start + (end - start) * i as f64 / segments as f64).to_radians();
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    let middle = (0.5 * (start + end)).to_radians();
    let label_radius = radius + config.label_offset;
    let label_position = Point2::new(label_radius * middle.cos(), label_radius * middle.sin());

    AngleArc {
        kind,
        points,
        label_position,
        label,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::physics::{
        RefractionInput,
        compute_refraction,
    };

    fn diagram(angle: f64, n1: f64, n2: f64) -> Option<RayDiagram> {
        let result = compute_refraction(RefractionInput::new(angle, n1, n2));
        RayDiagram::new(&result, &DiagramConfig::default())
    }

    #[test]
    fn incident_ray_ends_at_origin() {
        let diagram = diagram(30.0, 1.0, 1.33).unwrap();

        assert_eq!(diagram.incident.end, Point2::origin());
        assert_abs_diff_eq!(diagram.incident.start.x, -50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            diagram.incident.start.y,
            100.0 * 30f64.to_radians().cos(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn refracted_ray_enters_medium_2() {
        let diagram = diagram(30.0, 1.0, 1.33).unwrap();

        let OutgoingRay::Refracted(ray) = diagram.outgoing
        else {
            panic!("expected refraction");
        };
        assert_eq!(ray.start, Point2::origin());
        assert!(ray.end.x > 0.0);
        assert!(ray.end.y < 0.0);

        // angle to the (downward) normal
        let angle = ray.end.x.atan2(-ray.end.y).to_degrees();
        assert_abs_diff_eq!(angle, 22.08, epsilon = 0.01);
        assert_abs_diff_eq!(ray.direction().norm(), 100.0, epsilon = 1e-9);
        assert!(diagram.total_internal_reflection.is_none());
        assert!(diagram.critical.is_none());
    }

    #[test]
    fn reflected_ray_mirrors_incident_ray() {
        let diagram = diagram(60.0, 1.52, 1.0).unwrap();

        let OutgoingRay::Reflected(ray) = diagram.outgoing
        else {
            panic!("expected total internal reflection");
        };
        assert_abs_diff_eq!(ray.end.x, -diagram.incident.start.x, epsilon = 1e-9);
        assert_abs_diff_eq!(ray.end.y, diagram.incident.start.y, epsilon = 1e-9);
        assert!(diagram.total_internal_reflection.is_some());

        let kinds = diagram.arcs.iter().map(|arc| arc.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![AngleKind::Incidence, AngleKind::Reflection]);
    }

    #[test]
    fn critical_angle_is_annotated() {
        let diagram = diagram(30.0, 1.52, 1.0).unwrap();

        let critical = diagram.critical.unwrap();
        assert_eq!(critical.label, "θc = 41.1°");
        assert!(matches!(diagram.outgoing, OutgoingRay::Refracted(_)));
    }

    #[test]
    fn arcs_span_their_angle() {
        let diagram = diagram(30.0, 1.0, 1.33).unwrap();
        let arc = &diagram.arcs[0];

        assert_eq!(arc.kind, AngleKind::Incidence);
        assert_eq!(arc.points.len(), 51);
        assert_abs_diff_eq!(arc.points[0].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.points[0].y, 40.0, epsilon = 1e-9);

        let last = arc.points.last().unwrap();
        assert_abs_diff_eq!(last.x, -20.0, epsilon = 1e-9);
        assert_eq!(arc.label, "θ₁ = 30°");
    }

    #[test]
    fn undefined_results_have_no_diagram() {
        assert!(diagram(30.0, 1.0, 0.0).is_none());
        assert!(diagram(30.0, 0.0, 0.0).is_none());
    }
}
