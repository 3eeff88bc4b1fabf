use palette::Srgb;

pub mod serde {
    pub mod palette {
        // colors are stored as `[r, g, b]` with components in `0.0..=1.0`
        pub use palette::serde::as_array::*;
    }
}

pub fn srgb_to_color32(color: Srgb) -> egui::Color32 {
    let color: Srgb<u8> = color.into_format();
    egui::Color32::from_rgb(color.red, color.green, color.blue)
}

pub fn srgb_to_color32_with_alpha(color: Srgb, alpha: f32) -> egui::Color32 {
    let color: Srgb<u8> = color.into_format();
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(color.red, color.green, color.blue, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_converts_colors() {
        assert_eq!(
            srgb_to_color32(Srgb::new(1.0, 0.0, 0.0)),
            egui::Color32::from_rgb(255, 0, 0)
        );
        assert_eq!(
            srgb_to_color32_with_alpha(Srgb::new(0.0, 0.0, 1.0), 2.0).a(),
            255
        );
    }
}
