//! Root container component
//!
//! The App constructs exactly one ParentComponent, renders it under a
//! static banner, and routes terminal events. It owns no business logic:
//! the greeting behavior lives entirely in the parent, and the App never
//! sees the callback travel from parent to child.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, ParentComponent, QuitDialog};
use crate::config::Config;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Root container - composes the component tree and handles lifecycle keys
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Whether the quit confirmation overlay is showing
    show_quit_confirm: bool,

    /// The single parent instance this root composes
    parent: ParentComponent,

    quit_dialog: QuitDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create the App from the on-disk config, falling back to defaults
    pub fn new() -> App {
        Self::with_config(Config::load().unwrap_or_default())
    }

    pub fn with_config(config: Config) -> App {
        App {
            should_quit: false,
            show_quit_confirm: false,
            parent: ParentComponent::new(config.parent_name, config.child_name),
            quit_dialog: QuitDialog,
        }
    }

    pub fn parent(&self) -> &ParentComponent {
        &self.parent
    }

    fn draw_banner(&self, frame: &mut Frame, area: Rect) {
        // Static label, never interactive
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(
                "greet-tui",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  a parent-to-child callback, end to end"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter/Space", Style::default().fg(Color::Yellow)),
            Span::raw(" greet  "),
            Span::styled("n", Style::default().fg(Color::Yellow)),
            Span::raw(" greet with no argument  "),
            Span::styled("#", Style::default().fg(Color::Yellow)),
            Span::raw(" send a number  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.show_quit_confirm {
            return self.quit_dialog.handle_key_event(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(Some(Action::OpenQuitDialog)),
            _ => self.parent.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.show_quit_confirm {
            return Ok(None);
        }
        self.parent.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ForceQuit => self.should_quit = true,
            Action::OpenQuitDialog => self.show_quit_confirm = true,
            Action::CloseModal => self.show_quit_confirm = false,
            Action::Tick | Action::Resize(_, _) => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.draw_banner(frame, layout.banner);
        self.parent.draw(frame, layout.content)?;
        self.draw_help(frame, layout.help);

        if self.show_quit_confirm {
            self.quit_dialog.draw(frame, area)?;
        }

        Ok(())
    }
}
