//! Parent component - owner of the greeting state and the greet callback
//!
//! The parent defines `greet` as a closure over its own state and hands
//! the child a handle to it at construction time. The child can trigger
//! the closure but never touches the captured state; the only visible
//! outcome of an interaction is an entry in the parent's greeting log.

use crate::action::Action;
use crate::callback::{ArgValue, Callback};
use crate::component::Component;
use crate::components::child::ChildComponent;
use crate::components::layout::split_parent_area;
use crate::model::greeting::{greet_message, GreetLog};
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use std::cell::RefCell;
use std::rc::Rc;

/// State owned exclusively by the parent and captured by its callback
struct ParentState {
    parent_name: String,
    log: GreetLog,
}

/// Parent component: holds the named state, defines the callback, and
/// composes the single child instance
pub struct ParentComponent {
    state: Rc<RefCell<ParentState>>,
    greet: Callback,
    child: ChildComponent,
}

impl ParentComponent {
    pub fn new(parent_name: impl Into<String>, child_name: impl Into<String>) -> Self {
        let state = Rc::new(RefCell::new(ParentState {
            parent_name: parent_name.into(),
            log: GreetLog::new(),
        }));

        // The closure is the only code that mutates the captured state.
        // A non-text argument aborts the invocation silently.
        let captured = Rc::clone(&state);
        let greet = Callback::new(move |arg| {
            let name = match arg {
                Some(ArgValue::Text(name)) => name,
                Some(_) => return,
                None => captured.borrow().parent_name.clone(),
            };
            captured.borrow_mut().log.record(greet_message(&name));
        });

        let child = ChildComponent::new(greet.clone(), child_name);

        Self {
            state,
            greet,
            child,
        }
    }

    /// The parent's own handle to its callback
    pub fn greet_handle(&self) -> &Callback {
        &self.greet
    }

    pub fn child(&self) -> &ChildComponent {
        &self.child
    }

    pub fn greeting_count(&self) -> usize {
        self.state.borrow().log.len()
    }

    pub fn greetings(&self) -> Vec<String> {
        self.state
            .borrow()
            .log
            .entries()
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub fn last_greeting(&self) -> Option<String> {
        self.state
            .borrow()
            .log
            .last_message()
            .map(|message| message.to_string())
    }
}

impl Component for ParentComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // The parent defines no keys of its own; interactions belong to
        // the child.
        self.child.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        self.child.handle_mouse_event(mouse)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (log_area, button_area) = split_parent_area(area);

        let state = self.state.borrow();
        let items: Vec<ListItem> = if state.log.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No greetings yet - press a button below",
                Style::default().fg(Color::DarkGray),
            )))]
        } else {
            state
                .log
                .entries()
                .iter()
                .map(|entry| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            entry.at.format("%H:%M:%S  ").to_string(),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            entry.message.clone(),
                            Style::default().fg(Color::Green),
                        ),
                    ]))
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" Greetings ({}) ", state.log.len()))
                .title_style(Style::default().fg(Color::Cyan)),
        );
        drop(state);

        frame.render_widget(list, log_area);
        self.child.draw(frame, button_area)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_with_text_records_once() {
        let parent = ParentComponent::new("there", "Child");
        parent.greet_handle().call(Some(ArgValue::text("Child")));

        assert_eq!(parent.greeting_count(), 1);
        assert_eq!(parent.last_greeting().as_deref(), Some("Hello Child"));
    }

    #[test]
    fn test_greet_without_argument_uses_parent_name() {
        let parent = ParentComponent::new("there", "Child");
        parent.greet_handle().call(None);

        assert_eq!(parent.last_greeting().as_deref(), Some("Hello there"));
    }

    #[test]
    fn test_number_argument_is_swallowed() {
        let parent = ParentComponent::new("there", "Child");
        parent.greet_handle().call(Some(ArgValue::Number(7.0)));

        assert_eq!(parent.greeting_count(), 0);
    }

    #[test]
    fn test_child_receives_the_parents_handle() {
        let parent = ParentComponent::new("there", "Child");
        assert!(parent.child().callback().same_as(parent.greet_handle()));
    }

    #[test]
    fn test_invoking_through_child_matches_direct_call() {
        let parent = ParentComponent::new("there", "Child");

        parent.greet_handle().call(Some(ArgValue::text("Child")));
        parent
            .child()
            .callback()
            .call(Some(ArgValue::text("Child")));

        assert_eq!(
            parent.greetings(),
            vec!["Hello Child".to_string(), "Hello Child".to_string()]
        );
    }
}
