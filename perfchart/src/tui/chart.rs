use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use super::theme::{ACCENT_GREEN, CPU_RED, GPU_BLUE, INFO_DIM};
use crate::perf_log::{Bounds, PerfLog, Series};

/// How site counts are laid out along the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    /// log2 of the site count; benchmark sizes double each step
    Log2,
}

impl AxisScale {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Linear => Self::Log2,
            Self::Log2 => Self::Linear,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Log2 => "Log2",
        }
    }

    fn map_x(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Log2 => x.max(1.0).log2(),
        }
    }

    fn unmap_x(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Log2 => x.exp2(),
        }
    }
}

/// Plot-ready points for one series at one axis scale
#[derive(Debug, Clone)]
struct Plotted {
    linear: Vec<(f64, f64)>,
    log2: Vec<(f64, f64)>,
}

impl Plotted {
    fn new(series: &Series) -> Self {
        let linear = series.as_f64_points();
        let log2 = linear.iter().map(|&(x, y)| (AxisScale::Log2.map_x(x), y)).collect();
        Self { linear, log2 }
    }

    fn points(&self, scale: AxisScale) -> &[(f64, f64)] {
        match scale {
            AxisScale::Linear => &self.linear,
            AxisScale::Log2 => &self.log2,
        }
    }
}

/// Line chart of CPU and GPU timings against site count
pub struct ChartView {
    cpu: Plotted,
    gpu: Plotted,
    bounds: Option<Bounds>,
}

impl ChartView {
    pub fn new(log: &PerfLog) -> Self {
        Self { cpu: Plotted::new(&log.cpu), gpu: Plotted::new(&log.gpu), bounds: log.bounds() }
    }

    /// `[min, max]` for the x axis in plot coordinates
    pub fn x_bounds(&self, scale: AxisScale) -> [f64; 2] {
        let (lo, hi) = self.bounds.map_or((0.0, 1.0), |b| (b.x_min, b.x_max));
        let (lo, hi) = (scale.map_x(lo), scale.map_x(hi));
        if hi > lo {
            [lo, hi]
        } else {
            [lo - 1.0, hi + 1.0]
        }
    }

    /// `[0, max]` for the y axis, padded so the top point clears the border
    pub fn y_bounds(&self) -> [f64; 2] {
        let hi = self.bounds.map_or(0.0, |b| b.y_max);
        if hi > 0.0 {
            [0.0, hi * 1.05]
        } else {
            [0.0, 1.0]
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, scale: AxisScale) {
        let datasets = vec![
            Dataset::default()
                .name("CPU")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(CPU_RED))
                .data(self.cpu.points(scale)),
            Dataset::default()
                .name("GPU")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(GPU_BLUE))
                .data(self.gpu.points(scale)),
        ];

        let [x_lo, x_hi] = self.x_bounds(scale);
        let x_mid = (x_lo + x_hi) / 2.0;
        let x_labels: Vec<Span> = [x_lo, x_mid, x_hi]
            .into_iter()
            .map(|x| Span::styled(format!("{:.0}", scale.unmap_x(x)), Style::default().fg(INFO_DIM)))
            .collect();

        let [y_lo, y_hi] = self.y_bounds();
        let y_labels: Vec<Span> = [y_lo, (y_lo + y_hi) / 2.0, y_hi]
            .into_iter()
            .map(|y| Span::styled(format!("{y:.3}"), Style::default().fg(INFO_DIM)))
            .collect();

        let x_title = match scale {
            AxisScale::Linear => crate::X_AXIS_LABEL.to_string(),
            AxisScale::Log2 => format!("{} (log2)", crate::X_AXIS_LABEL),
        };

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        crate::CHART_TITLE,
                        Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD),
                    ))
                    .border_style(Style::default().fg(ACCENT_GREEN)),
            )
            .x_axis(
                Axis::default()
                    .title(x_title)
                    .style(Style::default().fg(INFO_DIM))
                    .bounds([x_lo, x_hi])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(crate::Y_AXIS_LABEL)
                    .style(Style::default().fg(INFO_DIM))
                    .bounds([y_lo, y_hi])
                    .labels(y_labels),
            )
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        f.render_widget(chart, area);
    }
}
