use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// Hue of the dashboard's blue accent, in degrees.
const ACCENT_HUE: f32 = 224.0;

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// The accent used for headings and the line chart.
pub fn accent() -> Color32 {
    hsl_to_color32(ACCENT_HUE, 0.64, 0.33)
}

/// `n` shades of the accent hue, light to dark, one per bar.
pub fn bar_shades(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let t = if n == 1 { 0.5 } else { i as f32 / (n - 1) as f32 };
            hsl_to_color32(ACCENT_HUE, 0.70, 0.70 - 0.35 * t)
        })
        .collect()
}

/// Green for growth, red for decline, grey for no change.
pub fn delta_color(delta: f64) -> Color32 {
    if delta > 0.0 {
        hsl_to_color32(142.0, 0.70, 0.35)
    } else if delta < 0.0 {
        hsl_to_color32(0.0, 0.72, 0.45)
    } else {
        Color32::GRAY
    }
}
