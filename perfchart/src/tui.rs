//! # Terminal User Interface (TUI)
//!
//! Interactive terminal chart using `ratatui`.
//!
//! ## View Modes
//!
//! - **Chart** - CPU/GPU line chart with summary panel (default)
//! - **Help** - Keyboard shortcuts overlay
//!
//! ## Sub-Modules
//!
//! - `chart` - Line chart of both series, linear or log2 x axis
//! - `summary` - Per-device totals and speedup table
//! - `layout` - Responsive breakpoints
//! - `theme` - Color scheme

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

pub mod chart;
pub mod layout;
mod summary;
mod theme;

use crate::analysis::Comparison;
use crate::domain::TuiError;
use crate::perf_log::PerfLog;
use chart::{AxisScale, ChartView};
use layout::compute_layout;
use summary::SummaryPanel;
use theme::{ACCENT_GREEN, CAUTION_AMBER, CPU_RED, GPU_BLUE, INFO_DIM};

// =============================================================================
// STYLE CONSTANTS
// =============================================================================

const STYLE_HEADING: Style = Style::new().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD);
const STYLE_DIM: Style = Style::new().fg(INFO_DIM);
const STYLE_KEY: Style = Style::new().fg(CAUTION_AMBER);
const STYLE_TEXT: Style = Style::new().fg(ratatui::style::Color::White);

/// Input poll interval; the chart is static so this only bounds key latency
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewMode {
    Chart,
    Help,
}

/// Interactive chart over a fully parsed log
pub struct App<'a> {
    source: String,
    log: &'a PerfLog,
    comparison: &'a Comparison,
    chart_view: ChartView,

    scale: AxisScale,
    view_mode: ViewMode,
    should_quit: bool,
}

impl<'a> App<'a> {
    /// `source` is shown in the header (usually the log path)
    #[must_use]
    pub fn new(source: impl Into<String>, log: &'a PerfLog, comparison: &'a Comparison) -> Self {
        Self {
            source: source.into(),
            log,
            comparison,
            chart_view: ChartView::new(log),
            scale: AxisScale::Linear,
            view_mode: ViewMode::Chart,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn scale(&self) -> AxisScale {
        self.scale
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn help_visible(&self) -> bool {
        self.view_mode == ViewMode::Help
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.view_mode {
            ViewMode::Chart => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('l' | 'L') => {
                    self.scale = self.scale.toggled();
                    debug!("x axis scale: {}", self.scale.label());
                }
                KeyCode::Char('?') => self.view_mode = ViewMode::Help,
                _ => {}
            },
            // Any key closes help
            ViewMode::Help => self.view_mode = ViewMode::Chart,
        }
    }

    /// Draw one frame
    pub fn draw(&self, f: &mut Frame) {
        let area = f.area();
        let config = compute_layout(area.width, area.height);

        let main_area = if config.show_status_bar {
            let outer = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Header
                    Constraint::Min(0),    // Chart + summary
                    Constraint::Length(3), // Key bar
                ])
                .split(area);
            self.render_header(f, outer[0]);
            self.render_key_bar(f, outer[2]);
            outer[1]
        } else {
            area
        };

        if config.show_summary_panel {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(config.col_constraints())
                .split(main_area);
            self.chart_view.render(f, cols[0], self.scale);
            SummaryPanel::new(self.comparison).render(f, cols[1]);
        } else {
            self.chart_view.render(f, main_area, self.scale);
        }

        if self.view_mode == ViewMode::Help {
            render_help_overlay(f, area);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled("PERFCHART", STYLE_HEADING),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(self.source.as_str(), Style::new().fg(ACCENT_GREEN)),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(format!("{} CPU", self.log.cpu.len()), Style::new().fg(CPU_RED)),
            Span::styled(" / ", STYLE_DIM),
            Span::styled(format!("{} GPU", self.log.gpu.len()), Style::new().fg(GPU_BLUE)),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(ACCENT_GREEN)));
        f.render_widget(header, area);
    }

    fn render_key_bar(&self, f: &mut Frame, area: Rect) {
        let status_line = Line::from(vec![
            Span::styled("Q", STYLE_KEY),
            Span::styled(":Quit ", STYLE_DIM),
            Span::styled("L", STYLE_KEY),
            Span::styled(":Log2 axis ", STYLE_DIM),
            Span::styled("?", STYLE_KEY),
            Span::styled(":Help ", STYLE_DIM),
            Span::styled(format!("[{}]", self.scale.label()), Style::new().fg(CAUTION_AMBER)),
        ]);
        let status = Paragraph::new(status_line)
            .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(ACCENT_GREEN)));
        f.render_widget(status, area);
    }

    /// Draw and handle input until the user quits
    ///
    /// # Errors
    /// Returns an error if drawing or reading input fails
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), TuiError> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Create a centered popup area with given width percentage and height in lines
fn centered_popup(area: Rect, width_percent: u16, height_lines: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height_lines), Constraint::Fill(1)])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_popup(area, 50, 12);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  Reading the chart", STYLE_HEADING)),
        Line::from(vec![
            Span::styled("  red", Style::new().fg(CPU_RED)),
            Span::styled(" CPU runs   ", STYLE_TEXT),
            Span::styled("blue", Style::new().fg(GPU_BLUE)),
            Span::styled(" GPU runs", STYLE_TEXT),
        ]),
        Line::from(Span::styled("  Speedup = CPU time / GPU time", STYLE_DIM)),
        Line::from(""),
        Line::from(Span::styled("  Keys", STYLE_HEADING)),
        Line::from(vec![
            Span::styled("  L", STYLE_KEY),
            Span::styled(" Toggle log2 x axis   ", STYLE_TEXT),
            Span::styled("Q", STYLE_KEY),
            Span::styled(" Quit", STYLE_TEXT),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", STYLE_DIM)),
    ];

    let help_widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::new().bg(ratatui::style::Color::Black).fg(ACCENT_GREEN)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

/// Show the chart on the alternate screen until the user quits
///
/// This is the main entry point for interactive mode. It:
/// 1. Sets up the terminal in raw mode
/// 2. Runs the draw/input loop
/// 3. Restores the terminal, even when the loop failed
///
/// # Errors
/// Returns an error if terminal setup, rendering or cleanup fails
pub fn run(source: &str, log: &PerfLog, comparison: &Comparison) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, log, comparison);
    let result = app.run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compare;
    use ratatui::backend::TestBackend;

    const LOG: &str = "1 2 0.02\n1 4 0.08\n1 8 0.32\n2 2 0.01\n2 4 0.01\n2 8 0.02\n";

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_keys_toggle_scale_and_quit() {
        let log: PerfLog = LOG.parse().unwrap();
        let comparison = compare(&log);
        let mut app = App::new("perf.txt", &log, &comparison);

        app.handle_key(KeyCode::Char('l'));
        assert_eq!(app.scale(), AxisScale::Log2);

        app.handle_key(KeyCode::Char('?'));
        assert!(app.help_visible());
        // Quit key only closes help
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.help_visible());
        assert!(!app.should_quit());

        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_draw_shows_title_legend_and_summary() {
        let log: PerfLog = LOG.parse().unwrap();
        let comparison = compare(&log);
        let app = App::new("perf.txt", &log, &comparison);

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Number of Sites vs Time (GPU and CPU)"));
        assert!(text.contains("Time (seconds)"));
        assert!(text.contains("CPU"));
        assert!(text.contains("GPU"));
        assert!(text.contains("Summary"));
        assert!(text.contains("perf.txt"));
    }

    #[test]
    fn test_draw_small_terminal_hides_summary() {
        let log: PerfLog = LOG.parse().unwrap();
        let comparison = compare(&log);
        let app = App::new("perf.txt", &log, &comparison);

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        assert!(!screen_text(&terminal).contains("Summary"));
    }

    #[test]
    fn test_draw_short_terminal_is_chart_only() {
        let log: PerfLog = LOG.parse().unwrap();
        let comparison = compare(&log);
        let app = App::new("perf.txt", &log, &comparison);

        let mut terminal = Terminal::new(TestBackend::new(140, 10)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let text = screen_text(&terminal);
        assert!(!text.contains("PERFCHART"));
        assert!(!text.contains(":Quit"));
        assert!(text.contains("Number of Sites vs Time"));
    }
}
