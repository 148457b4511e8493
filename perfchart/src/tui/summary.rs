use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{speedup_color, ACCENT_GREEN, CAUTION_AMBER, CPU_RED, GPU_BLUE, INFO_DIM};
use crate::analysis::{Comparison, SeriesSummary};

/// Side panel with per-device totals and the speedup table
pub struct SummaryPanel<'a> {
    comparison: &'a Comparison,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(comparison: &'a Comparison) -> Self {
        Self { comparison }
    }

    fn series_lines(summary: &SeriesSummary, color: ratatui::style::Color) -> Vec<Line<'static>> {
        let max_sites = summary.max_sites.map_or_else(|| "-".to_string(), |s| s.to_string());
        vec![
            Line::from(Span::styled(
                format!(" {}", summary.device.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("  Runs  ", Style::default().fg(INFO_DIM)),
                Span::styled(summary.runs.to_string(), Style::default().fg(ACCENT_GREEN)),
            ]),
            Line::from(vec![
                Span::styled("  Max   ", Style::default().fg(INFO_DIM)),
                Span::styled(max_sites, Style::default().fg(ACCENT_GREEN)),
            ]),
            Line::from(vec![
                Span::styled("  Total ", Style::default().fg(INFO_DIM)),
                Span::styled(format!("{:.3}s", summary.total_secs), Style::default().fg(ACCENT_GREEN)),
            ]),
        ]
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines = Self::series_lines(&self.comparison.cpu, CPU_RED);
        lines.extend(Self::series_lines(&self.comparison.gpu, GPU_BLUE));
        lines.push(Line::from(""));

        if let Some(best) = self.comparison.best() {
            let speedup = best.speedup.unwrap_or(0.0);
            lines.push(Line::from(vec![
                Span::styled(" Best ", Style::default().fg(INFO_DIM)),
                Span::styled(
                    format!("{speedup:.1}x"),
                    Style::default().fg(speedup_color(speedup)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" @ {}", best.sites), Style::default().fg(INFO_DIM)),
            ]));
            lines.push(Line::from(""));
        }

        if !self.comparison.rows.is_empty() {
            lines.push(Line::from(Span::styled(
                " Sites   Speedup",
                Style::default().fg(INFO_DIM).add_modifier(Modifier::BOLD),
            )));
        }
        for row in &self.comparison.rows {
            let (text, color) = row
                .speedup
                .map_or_else(|| ("-".to_string(), CAUTION_AMBER), |s| (format!("{s:.1}x"), speedup_color(s)));
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<7} ", row.sites), Style::default().fg(ACCENT_GREEN)),
                Span::styled(text, Style::default().fg(color)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Summary")
                .border_style(Style::default().fg(ACCENT_GREEN)),
        );

        f.render_widget(paragraph, area);
    }
}
