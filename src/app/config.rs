use palette::Srgb;
use serde::{
    Deserialize,
    Serialize,
};

use crate::view::diagram::DiagramConfig;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub diagram: DiagramConfig,

    #[serde(default)]
    pub colors: ColorsConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diagram = &self.diagram;

        if !(diagram.extent > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "diagram.extent",
                value: diagram.extent,
            });
        }
        if !(diagram.ray_length > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "diagram.ray_length",
                value: diagram.ray_length,
            });
        }
        for (field, value) in [
            ("diagram.incidence_arc_radius", diagram.incidence_arc_radius),
            ("diagram.reflection_arc_radius", diagram.reflection_arc_radius),
            ("diagram.refraction_arc_radius", diagram.refraction_arc_radius),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if diagram.ray_length > diagram.extent {
            return Err(ConfigError::RayOutOfView {
                ray_length: diagram.ray_length,
                extent: diagram.extent,
            });
        }
        if diagram.arc_segments == 0 {
            return Err(ConfigError::NoArcSegments);
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, but is {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Rays of length {ray_length} don't fit into the diagram extent {extent}")]
    RayOutOfView { ray_length: f64, extent: f64 },

    #[error("Angle arcs need at least one segment")]
    NoArcSegments,

    #[error("Invalid window size: {width} x {height}")]
    InvalidWindowSize { width: f32, height: f32 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f32,

    #[serde(default = "default_window_height")]
    pub height: f32,

    /// Width of the side panel with calculation and result.
    #[serde(default = "default_side_panel_width")]
    pub side_panel_width: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            side_panel_width: default_side_panel_width(),
        }
    }
}

fn default_window_width() -> f32 {
    1440.0
}

fn default_window_height() -> f32 {
    800.0
}

fn default_side_panel_width() -> f32 {
    460.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorsConfig {
    #[serde(
        default = "default_incident_ray_color",
        with = "crate::util::serde::palette"
    )]
    pub incident_ray: Srgb,

    #[serde(
        default = "default_refracted_ray_color",
        with = "crate::util::serde::palette"
    )]
    pub refracted_ray: Srgb,

    #[serde(
        default = "default_reflected_ray_color",
        with = "crate::util::serde::palette"
    )]
    pub reflected_ray: Srgb,

    #[serde(
        default = "default_critical_angle_color",
        with = "crate::util::serde::palette"
    )]
    pub critical_angle: Srgb,

    #[serde(
        default = "default_upper_medium_color",
        with = "crate::util::serde::palette"
    )]
    pub upper_medium: Srgb,

    #[serde(
        default = "default_lower_medium_color",
        with = "crate::util::serde::palette"
    )]
    pub lower_medium: Srgb,

    /// Opacity of the media fill.
    #[serde(default = "default_medium_alpha")]
    pub medium_alpha: f32,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            incident_ray: default_incident_ray_color(),
            refracted_ray: default_refracted_ray_color(),
            reflected_ray: default_reflected_ray_color(),
            critical_angle: default_critical_angle_color(),
            upper_medium: default_upper_medium_color(),
            lower_medium: default_lower_medium_color(),
            medium_alpha: default_medium_alpha(),
        }
    }
}

fn default_incident_ray_color() -> Srgb {
    palette::named::RED.into_format()
}

fn default_refracted_ray_color() -> Srgb {
    palette::named::BLUE.into_format()
}

fn default_reflected_ray_color() -> Srgb {
    palette::named::GREEN.into_format()
}

fn default_critical_angle_color() -> Srgb {
    palette::named::ORANGE.into_format()
}

fn default_upper_medium_color() -> Srgb {
    palette::named::LIGHTBLUE.into_format()
}

fn default_lower_medium_color() -> Srgb {
    palette::named::LIGHTCORAL.into_format()
}

fn default_medium_alpha() -> f32 {
    0.15
}
