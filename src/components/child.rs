//! Child component - button row that triggers the parent's callback
//!
//! The child receives a `Callback` handle at construction and never learns
//! what the closure does; it only knows the calling contract (optional
//! `ArgValue`, nothing returned). Each interaction triggers exactly one
//! invocation, synchronously, then the child is idle again.

use crate::action::Action;
use crate::callback::{ArgValue, Callback};
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const BUTTON_COUNT: usize = 3;

/// Child component: renders three buttons and invokes the parent-owned
/// callback when one is activated
pub struct ChildComponent {
    /// Required input: the parent's callback, held but never inspected
    on_greet: Callback,
    /// Name the child supplies on the with-argument button
    name: String,
    /// Button hit areas from the last draw, for mouse clicks
    button_areas: [Rect; BUTTON_COUNT],
    /// Interactions seen so far
    presses: u64,
}

impl ChildComponent {
    /// Construct the child; the callback input is required by signature,
    /// so a composed tree can never be missing it.
    pub fn new(on_greet: Callback, name: impl Into<String>) -> Self {
        Self {
            on_greet,
            name: name.into(),
            button_areas: [Rect::default(); BUTTON_COUNT],
            presses: 0,
        }
    }

    /// The callback handle this child was given
    pub fn callback(&self) -> &Callback {
        &self.on_greet
    }

    pub fn presses(&self) -> u64 {
        self.presses
    }

    fn press(&mut self, index: usize) {
        let arg = match index {
            0 => Some(ArgValue::text(self.name.clone())),
            1 => None,
            _ => Some(ArgValue::Number(42.0)),
        };
        self.presses += 1;
        self.on_greet.call(arg);
    }

    fn button_labels(&self) -> [String; BUTTON_COUNT] {
        [
            format!("Greet \"{}\"  (Enter)", self.name),
            "Greet with no argument  (n)".to_string(),
            "Send a number  (#)".to_string(),
        ]
    }
}

impl Component for ChildComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.press(0),
            KeyCode::Char('n') => self.press(1),
            KeyCode::Char('#') => self.press(2),
            _ => {}
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let position = Position::new(mouse.column, mouse.row);
            if let Some(index) = self
                .button_areas
                .iter()
                .position(|area| area.contains(position))
            {
                self.press(index);
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(format!(" Child \u{b7} {} presses ", self.presses))
            .title_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let labels = self.button_labels();
        let label_width = labels
            .iter()
            .map(|label| label.as_str().width())
            .max()
            .unwrap_or(0);

        // One column per button, equal widths
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); BUTTON_COUNT])
            .split(inner);

        for (index, label) in labels.iter().enumerate() {
            let padded = format!(" {:^width$} ", label, width = label_width);
            let button_area = columns[index];
            self.button_areas[index] = button_area;

            let style = if index == 2 {
                // The number button exists to show the guard swallowing it
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            };

            let button = Paragraph::new(Line::from(Span::styled(padded, style)))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(button, button_area);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_child() -> (ChildComponent, Rc<RefCell<Vec<Option<ArgValue>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let captured = Rc::clone(&calls);
        let cb = Callback::new(move |arg| captured.borrow_mut().push(arg));
        (ChildComponent::new(cb, "Child"), calls)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_invokes_with_child_name() {
        let (mut child, calls) = recording_child();
        child.handle_key_event(key(KeyCode::Enter)).unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], Some(ArgValue::text("Child")));
    }

    #[test]
    fn test_n_invokes_with_no_argument() {
        let (mut child, calls) = recording_child();
        child.handle_key_event(key(KeyCode::Char('n'))).unwrap();

        assert_eq!(calls.borrow().as_slice(), &[None]);
    }

    #[test]
    fn test_hash_invokes_with_number() {
        let (mut child, calls) = recording_child();
        child.handle_key_event(key(KeyCode::Char('#'))).unwrap();

        assert_eq!(calls.borrow().as_slice(), &[Some(ArgValue::Number(42.0))]);
    }

    #[test]
    fn test_unmapped_keys_do_not_invoke() {
        let (mut child, calls) = recording_child();
        child.handle_key_event(key(KeyCode::Char('x'))).unwrap();
        child.handle_key_event(key(KeyCode::Up)).unwrap();

        assert!(calls.borrow().is_empty());
        assert_eq!(child.presses(), 0);
    }

    #[test]
    fn test_sequential_presses_invoke_once_each() {
        let (mut child, calls) = recording_child();
        for _ in 0..5 {
            child.handle_key_event(key(KeyCode::Enter)).unwrap();
        }

        assert_eq!(calls.borrow().len(), 5);
        assert_eq!(child.presses(), 5);
    }

    #[test]
    fn test_child_holds_identical_handle() {
        let cb = Callback::new(|_| {});
        let child = ChildComponent::new(cb.clone(), "Child");
        assert!(child.callback().same_as(&cb));
    }
}
