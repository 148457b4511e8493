//! TUI color theme

use ratatui::style::Color;

// Series colors follow the usual red CPU / blue GPU pairing
pub const CPU_RED: Color = Color::Rgb(255, 64, 64);
pub const GPU_BLUE: Color = Color::Rgb(64, 128, 255);

// Chrome
pub const ACCENT_GREEN: Color = Color::Rgb(0, 255, 0);
pub const CAUTION_AMBER: Color = Color::Rgb(255, 191, 0);
pub const INFO_DIM: Color = Color::Rgb(0, 180, 0);

/// Color for a CPU/GPU speedup figure
/// - Above 10x: green
/// - Above 1x: amber
/// - Otherwise (GPU slower): red
#[must_use]
pub fn speedup_color(speedup: f64) -> Color {
    if speedup > 10.0 {
        ACCENT_GREEN
    } else if speedup > 1.0 {
        CAUTION_AMBER
    } else {
        CPU_RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speedup_color_thresholds() {
        assert_eq!(speedup_color(50.0), ACCENT_GREEN);
        assert_eq!(speedup_color(2.0), CAUTION_AMBER);
        assert_eq!(speedup_color(0.5), CPU_RED);
    }
}
