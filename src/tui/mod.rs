//! Terminal host for the shortcut dispatcher.
//!
//! The host owns the keyboard stream and the focus model. Every key press is
//! converted to a [`KeyInput`] tagged with the focused element and emitted on
//! the [`KeyboardHub`]. Only when no listener claimed the event does the host
//! apply its own default behavior (typing, focus cycling).

pub mod help_overlay;
pub mod status_bar;
pub mod text_field;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::dispatcher::{
    DispatcherConfig, FocusTarget, KeyInput, KeyboardHub, ShortcutDispatcher,
};
use crate::shortcuts::ShortcutName;

pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use text_field::TextField;
pub use theme::Theme;

const MAX_ACTIVITY: usize = 200;

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The search text field
    Search,
    /// The shortcut list
    Shortcuts,
}

impl Focus {
    /// Focus target reported with key events.
    #[must_use]
    pub const fn target(self) -> FocusTarget {
        match self {
            Self::Search => FocusTarget::TextField,
            Self::Shortcuts => FocusTarget::Control,
        }
    }

    /// Display name for the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Shortcuts => "Shortcuts",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Search => Self::Shortcuts,
            Self::Shortcuts => Self::Search,
        }
    }
}

/// State of the terminal host.
pub struct AppState {
    /// Keyboard event source fed by the main loop
    pub hub: KeyboardHub,
    /// The dispatcher under test, subscribed to `hub`
    pub dispatcher: ShortcutDispatcher,
    /// Action ids queued by fired shortcuts, applied after each event
    fired: Rc<RefCell<VecDeque<String>>>,
    /// Search field
    pub search: TextField,
    /// Focused pane
    pub focus: Focus,
    /// Highlighted row in the shortcut list
    pub selected: usize,
    /// Newest last
    pub activity: VecDeque<String>,
    /// Help overlay visible
    pub show_help: bool,
    /// Set when the loop should exit
    pub should_quit: bool,
    /// Colors
    pub theme: Theme,
}

impl AppState {
    /// Build the host and activate its dispatcher.
    pub fn new(config: &Config, theme: Theme) -> Result<Self> {
        let fired: Rc<RefCell<VecDeque<String>>> = Rc::default();

        let queue = Rc::clone(&fired);
        let dispatcher_config = config.to_dispatcher_config(move |id| {
            let queue = Rc::clone(&queue);
            let id = id.to_string();
            Rc::new(move || queue.borrow_mut().push_back(id.clone()))
        })?;

        let hub = KeyboardHub::new();
        let mut dispatcher = ShortcutDispatcher::new(dispatcher_config);
        dispatcher.activate(&hub);

        Ok(Self {
            hub,
            dispatcher,
            fired,
            search: TextField::new(),
            focus: Focus::Shortcuts,
            selected: 0,
            activity: VecDeque::with_capacity(MAX_ACTIVITY + 1),
            show_help: false,
            should_quit: false,
            theme,
        })
    }

    /// Route one key press through the hub, then apply host defaults if unclaimed.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let mut input = KeyInput::from(key).with_target(self.focus.target());
        self.hub.emit(&mut input);

        if !input.default_prevented() {
            self.apply_default(key);
        }

        self.apply_fired_actions();
    }

    /// Re-supply the dispatcher config with a new enable flag.
    pub fn set_shortcuts_enabled(&mut self, enabled: bool) {
        let config = DispatcherConfig::new(self.dispatcher.shortcuts()).enabled(enabled);
        self.dispatcher.configure(config);
        self.log(format!(
            "Shortcuts {}",
            if enabled { "enabled" } else { "disabled" }
        ));
    }

    fn apply_default(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::F(2) => self.set_shortcuts_enabled(!self.dispatcher.is_enabled()),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.next(),
            _ => match self.focus {
                Focus::Search => {
                    if key.code == KeyCode::Enter {
                        let query = self.search.value().to_string();
                        self.search.clear();
                        self.log(format!("Search submitted: {query:?}"));
                    } else {
                        self.search.handle_key(key);
                    }
                }
                Focus::Shortcuts => match key.code {
                    KeyCode::Up => self.move_selection(-1),
                    KeyCode::Down => self.move_selection(1),
                    _ => {}
                },
            },
        }
    }

    fn apply_fired_actions(&mut self) {
        loop {
            // Pop in its own statement so the queue borrow ends before handlers run.
            let next = self.fired.borrow_mut().pop_front();
            let Some(id) = next else { break };
            self.log(format!("Fired: {id}"));

            let Ok(name) = id.parse::<ShortcutName>() else {
                continue;
            };
            match name {
                ShortcutName::Search => self.focus = Focus::Search,
                ShortcutName::Close => {
                    if self.show_help {
                        self.show_help = false;
                    } else if self.focus == Focus::Search {
                        self.focus = Focus::Shortcuts;
                    }
                }
                ShortcutName::ToggleHelp => self.show_help = !self.show_help,
                ShortcutName::Quit => self.should_quit = true,
                ShortcutName::NextItem => self.move_selection(1),
                ShortcutName::PreviousItem => self.move_selection(-1),
                ShortcutName::NewItem | ShortcutName::Save | ShortcutName::Refresh => {}
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.dispatcher.shortcuts().len();
        if count == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(count - 1);
    }

    fn log(&mut self, message: String) {
        tracing::info!(%message, "activity");
        self.activity.push_back(message);
        if self.activity.len() > MAX_ACTIVITY {
            self.activity.pop_front();
        }
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    while !state.should_quit {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    state.handle_key_event(key);
                }
            }
        }
    }

    Ok(())
}

fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search field
            Constraint::Min(5),    // Shortcuts + activity
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_search(f, chunks[0], state);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_shortcuts(f, main[0], state);
    render_activity(f, main[1], state);

    StatusBar::render(f, chunks[2], state, theme);

    if state.show_help {
        let area = f.area();
        HelpOverlay::render(f, area, &state.dispatcher.shortcuts(), theme);
    }
}

fn border_style(state: &AppState, pane: Focus) -> Style {
    if state.focus == pane {
        Style::default().fg(state.theme.accent)
    } else {
        Style::default().fg(state.theme.primary)
    }
}

fn render_search(f: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(state.search.value())
        .style(Style::default().fg(state.theme.text))
        .block(
            Block::default()
                .title(" Search (typing here suppresses shortcuts) ")
                .borders(Borders::ALL)
                .border_style(border_style(state, Focus::Search)),
        );
    f.render_widget(paragraph, area);

    if state.focus == Focus::Search && !state.show_help {
        let offset = u16::try_from(state.search.cursor()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_shortcuts(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let items: Vec<ListItem> = state
        .dispatcher
        .shortcuts()
        .iter()
        .map(|shortcut| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<20}", shortcut.label()),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    shortcut.description().to_string(),
                    Style::default().fg(theme.text),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {APP_NAME} Shortcuts "))
                .borders(Borders::ALL)
                .border_style(border_style(state, Focus::Shortcuts)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_activity(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = state
        .activity
        .iter()
        .rev()
        .take(visible)
        .map(|entry| {
            let color = if entry.starts_with("Fired") {
                theme.success
            } else {
                theme.text_muted
            };
            ListItem::new(Span::styled(entry.clone(), Style::default().fg(color)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Activity ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(list, area);
}
