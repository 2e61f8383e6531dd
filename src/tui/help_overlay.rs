//! Help overlay listing the active shortcuts.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::dispatcher::ShortcutDefinition;

/// Help overlay widget
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the overlay centered over `area`.
    pub fn render(f: &mut Frame, area: Rect, shortcuts: &[ShortcutDefinition], theme: &Theme) {
        let popup = centered_rect(60, 70, area);
        f.render_widget(Clear, popup);

        let label_width = shortcuts
            .iter()
            .map(|s| s.label().chars().count())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line> = shortcuts
            .iter()
            .map(|shortcut| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<label_width$}  ", shortcut.label()),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        shortcut.description().to_string(),
                        Style::default().fg(theme.text),
                    ),
                ])
            })
            .collect();

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No shortcuts configured",
                Style::default().fg(theme.text_muted),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Shortcuts are ignored while typing, except Esc.",
            Style::default().fg(theme.text_muted),
        )));
        lines.push(Line::from(Span::styled(
            "  Tab: switch focus  F2: enable/disable shortcuts",
            Style::default().fg(theme.text_muted),
        )));

        let help = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Keyboard Shortcuts ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(help, popup);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
