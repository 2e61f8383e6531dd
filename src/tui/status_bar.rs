//! Status bar widget showing dispatcher state and host keys

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let (status, color) = if state.dispatcher.is_enabled() {
            ("ON", theme.success)
        } else {
            ("OFF", theme.warning)
        };

        let line = Line::from(vec![
            Span::styled("Shortcuts: ", Style::default().fg(theme.primary)),
            Span::styled(
                status,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | Focus: ", Style::default().fg(theme.primary)),
            Span::styled(state.focus.label(), Style::default().fg(theme.accent)),
            Span::styled(
                " | Tab: switch focus  F2: toggle  Shift+?: help  Ctrl+C: exit",
                Style::default().fg(theme.text_muted),
            ),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted)),
        );
        f.render_widget(paragraph, area);
    }
}
