//! Responsive layout engine for the TUI.
//!
//! Adapts the layout based on terminal dimensions so the chart keeps most
//! of the screen on small terminals.

use ratatui::layout::Constraint;

// Width breakpoints
const WIDTH_CHART_ONLY: u16 = 80; // Below this: hide the summary panel
const WIDTH_NARROW: u16 = 110; // Below this: use tighter column split

// Height breakpoints
const HEIGHT_MINIMAL: u16 = 12; // Below this: chart only

/// Computed layout configuration based on terminal dimensions.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Whether to show the summary panel (right of the chart)
    pub show_summary_panel: bool,

    /// Whether to show the header and the key bar
    pub show_status_bar: bool,

    /// Chart column percentage (0-100)
    pub chart_pct: u16,

    /// Summary column percentage (0-100)
    pub summary_pct: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            show_summary_panel: true,
            show_status_bar: true,
            chart_pct: 70,
            summary_pct: 30,
        }
    }
}

impl LayoutConfig {
    /// Column constraints for the chart/summary split.
    pub fn col_constraints(&self) -> [Constraint; 2] {
        [Constraint::Percentage(self.chart_pct), Constraint::Percentage(self.summary_pct)]
    }
}

/// Compute layout configuration based on terminal dimensions.
///
/// | Terminal Size | Behavior |
/// |---------------|----------|
/// | Width < 80    | Chart fills the width, summary hidden |
/// | Width 80-110  | Narrow mode: chart 75%, summary 25% |
/// | Width > 110   | Normal mode: 70/30 split |
/// | Height < 12   | Minimal: chart only |
pub fn compute_layout(width: u16, height: u16) -> LayoutConfig {
    let mut config = LayoutConfig::default();

    if width < WIDTH_CHART_ONLY {
        config.show_summary_panel = false;
        config.chart_pct = 100;
        config.summary_pct = 0;
    } else if width <= WIDTH_NARROW {
        config.chart_pct = 75;
        config.summary_pct = 25;
    }

    if height < HEIGHT_MINIMAL {
        config.show_summary_panel = false;
        config.show_status_bar = false;
        config.chart_pct = 100;
        config.summary_pct = 0;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_layout() {
        let config = compute_layout(140, 40);
        assert!(config.show_summary_panel);
        assert!(config.show_status_bar);
        assert_eq!(config.chart_pct, 70);
    }

    #[test]
    fn test_narrow_layout() {
        let config = compute_layout(100, 40);
        assert_eq!(config.chart_pct, 75);
        assert_eq!(config.summary_pct, 25);
        assert!(config.show_summary_panel);
    }

    #[test]
    fn test_chart_only_width() {
        let config = compute_layout(60, 40);
        assert!(!config.show_summary_panel);
        assert_eq!(config.chart_pct, 100);
    }

    #[test]
    fn test_minimal_height() {
        let config = compute_layout(140, 10);
        assert_eq!(config.chart_pct, 100);
        assert!(!config.show_status_bar);
        assert!(!config.show_summary_panel);
    }
}
