use egui::{
    Color32,
    RichText,
};
use egui_plot::{
    Arrows,
    Corner,
    HLine,
    Legend,
    Line,
    LineStyle,
    Plot,
    PlotPoint,
    PlotPoints,
    PlotUi,
    Polygon,
    Text,
    VLine,
};
use nalgebra::Point2;
use strum::VariantArray;

use crate::{
    app::config::AppConfig,
    physics::{
        Material,
        RefractionInput,
    },
    session::{
        SessionEvent,
        control::{
            self,
            QuickPreset,
        },
    },
    util::{
        srgb_to_color32,
        srgb_to_color32_with_alpha,
    },
    view::{
        Views,
        diagram::{
            AngleKind,
            OutgoingRay,
            Segment,
        },
        panels::{
            CalculationPanel,
            Outcome,
            ResultPanel,
            format_value,
        },
    },
};

/// Sliders and preset buttons. Every user action pushes exactly one event.
pub fn controls(ui: &mut egui::Ui, input: &RefractionInput, events: &mut Vec<SessionEvent>) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            let mut angle = input.incidence_angle_degrees;
            if ui
                .add(
                    egui::Slider::new(&mut angle, control::INCIDENCE_ANGLE.range())
                        .text("Incidence angle θ₁")
                        .suffix("°")
                        .fixed_decimals(0),
                )
                .changed()
            {
                events.push(SessionEvent::SetIncidenceAngle(angle));
            }

            let mut n1 = input.n1;
            if ui
                .add(
                    egui::Slider::new(&mut n1, control::N1.range())
                        .text(index_label("n₁ (upper medium)", input.n1))
                        .fixed_decimals(2),
                )
                .changed()
            {
                events.push(SessionEvent::SetN1(n1));
            }

            let mut n2 = input.n2;
            if ui
                .add(
                    egui::Slider::new(&mut n2, control::N2.range())
                        .text(index_label("n₂ (lower medium)", input.n2))
                        .fixed_decimals(2),
                )
                .changed()
            {
                events.push(SessionEvent::SetN2(n2));
            }
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.label("Quick select");
            ui.horizontal(|ui| {
                for preset in QuickPreset::VARIANTS {
                    if ui.button(preset.to_string()).clicked() {
                        events.push(SessionEvent::QuickPreset(*preset));
                    }
                }
                if ui.button("Reset").clicked() {
                    events.push(SessionEvent::Reset);
                }
            });
        });
    });
}

fn index_label(name: &str, index: f64) -> String {
    match Material::matching(index) {
        Some(material) => format!("{name}: {material}"),
        None => name.to_owned(),
    }
}

pub fn ray_diagram(ui: &mut egui::Ui, views: &Views, config: &AppConfig) {
    let extent = config.diagram.extent;
    let colors = &config.colors;

    Plot::new("ray_diagram")
        .legend(Legend::default().position(Corner::RightTop))
        .data_aspect(1.0)
        .include_x(-extent)
        .include_x(extent)
        .include_y(-extent)
        .include_y(extent)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("x")
        .y_axis_label("y")
        .show(ui, |plot_ui| {
            plot_ui.polygon(
                Polygon::new(
                    "",
                    PlotPoints::from(vec![
                        [-extent, 0.0],
                        [extent, 0.0],
                        [extent, extent],
                        [-extent, extent],
                    ]),
                )
                .fill_color(srgb_to_color32_with_alpha(
                    colors.upper_medium,
                    colors.medium_alpha,
                ))
                .stroke(egui::Stroke::NONE),
            );
            plot_ui.polygon(
                Polygon::new(
                    "",
                    PlotPoints::from(vec![
                        [-extent, -extent],
                        [extent, -extent],
                        [extent, 0.0],
                        [-extent, 0.0],
                    ]),
                )
                .fill_color(srgb_to_color32_with_alpha(
                    colors.lower_medium,
                    colors.medium_alpha,
                ))
                .stroke(egui::Stroke::NONE),
            );

            plot_ui.hline(HLine::new("", 0.0).color(Color32::BLACK).width(4.0));
            plot_ui.vline(
                VLine::new("", 0.0)
                    .color(Color32::GRAY)
                    .width(2.0)
                    .style(LineStyle::dotted_dense()),
            );
            plot_ui.text(
                Text::new("", PlotPoint::new(5.0, 0.85 * extent), "Normal")
                    .anchor(egui::Align2::LEFT_TOP),
            );

            let Some(diagram) = &views.diagram
            else {
                let input = &views.result.input;
                plot_ui.text(Text::new(
                    "",
                    PlotPoint::new(0.0, 0.5 * extent),
                    RichText::new(format!(
                        "Undefined configuration (n₁ = {}, n₂ = {})",
                        format_value(input.n1, 2),
                        format_value(input.n2, 2),
                    ))
                    .strong(),
                ));
                return;
            };

            for medium in &diagram.media {
                plot_ui.text(
                    Text::new(
                        "",
                        to_plot_point(&medium.position),
                        RichText::new(&medium.text).strong(),
                    )
                    .anchor(egui::Align2::LEFT_CENTER),
                );
            }

            if let Some(critical) = &diagram.critical {
                let color = srgb_to_color32(colors.critical_angle);
                plot_ui.line(
                    Line::new(
                        "Critical angle",
                        PlotPoints::from(segment_points(&critical.line)),
                    )
                    .color(color)
                    .width(2.0)
                    .style(LineStyle::dashed_loose()),
                );
                plot_ui.text(Text::new(
                    "",
                    to_plot_point(&critical.label_position),
                    RichText::new(&critical.label).color(color),
                ));
            }

            draw_ray(
                plot_ui,
                "Incident ray",
                &diagram.incident,
                srgb_to_color32(colors.incident_ray),
            );

            match &diagram.outgoing {
                OutgoingRay::Refracted(ray) => {
                    draw_ray(
                        plot_ui,
                        "Refracted ray",
                        ray,
                        srgb_to_color32(colors.refracted_ray),
                    );
                }
                OutgoingRay::Reflected(ray) => {
                    draw_ray(
                        plot_ui,
                        "Reflected ray",
                        ray,
                        srgb_to_color32(colors.reflected_ray),
                    );
                }
            }

            for arc in &diagram.arcs {
                let color = srgb_to_color32(match arc.kind {
                    AngleKind::Incidence => colors.incident_ray,
                    AngleKind::Reflection => colors.reflected_ray,
                    AngleKind::Refraction => colors.refracted_ray,
                });
                let points = arc
                    .points
                    .iter()
                    .map(|point| [point.x, point.y])
                    .collect::<Vec<_>>();
                plot_ui.line(Line::new("", PlotPoints::from(points)).color(color).width(3.0));
                plot_ui.text(Text::new(
                    "",
                    to_plot_point(&arc.label_position),
                    RichText::new(&arc.label).color(color).strong(),
                ));
            }

            if let Some(position) = &diagram.total_internal_reflection {
                plot_ui.text(Text::new(
                    "",
                    to_plot_point(position),
                    RichText::new("TOTAL INTERNAL REFLECTION")
                        .strong()
                        .color(Color32::BLACK)
                        .background_color(Color32::YELLOW),
                ));
            }
        });
}

fn draw_ray(plot_ui: &mut PlotUi, name: &str, ray: &Segment, color: Color32) {
    plot_ui.line(
        Line::new(name, PlotPoints::from(segment_points(ray)))
            .color(color)
            .width(4.0),
    );

    // arrow head at the end of the ray
    let direction = ray.direction();
    let head_start = ray.end - direction * 0.15;
    plot_ui.arrows(
        Arrows::new(
            name,
            PlotPoints::from(vec![[head_start.x, head_start.y]]),
            PlotPoints::from(vec![[ray.end.x, ray.end.y]]),
        )
        .color(color),
    );
}

fn segment_points(segment: &Segment) -> Vec<[f64; 2]> {
    vec![
        [segment.start.x, segment.start.y],
        [segment.end.x, segment.end.y],
    ]
}

fn to_plot_point(point: &Point2<f64>) -> PlotPoint {
    PlotPoint::new(point.x, point.y)
}

pub fn calculation_panel(ui: &mut egui::Ui, panel: &CalculationPanel) {
    ui.heading("Calculation");

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Snell's law").strong());
        ui.label(RichText::new(panel.formula).monospace());
    });

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Given values").strong());
        ui.label(panel.given.as_str());
    });

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Steps").strong());
        for step in &panel.steps {
            ui.label(RichText::new(step).monospace());
        }
    });
}

pub fn result_panel(ui: &mut egui::Ui, panel: &ResultPanel) {
    ui.heading("Result");

    let headline_color = match panel.outcome {
        Outcome::Refraction => Color32::from_rgb(0x2e, 0x8b, 0x57),
        Outcome::TotalInternalReflection => Color32::from_rgb(0xcd, 0x5c, 0x5c),
        Outcome::Undefined => ui.visuals().warn_fg_color,
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(&panel.headline)
                .strong()
                .size(16.0)
                .color(headline_color),
        );
        for detail in &panel.details {
            ui.label(detail.as_str());
        }
    });

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Physics rules").strong());
        for rule in panel.rules {
            ui.label(format!("• {rule}"));
        }
    });
}
