//! The trait every screen and widget implements.

use super::actions::Action;
use super::event_handler::EventType;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Translate one terminal event into an action for [`Component::update`].
    fn handle_events(&mut self, event: &EventType) -> Action {
        match event {
            EventType::Key(key) => self.handle_key_events(*key),
            EventType::Mouse(mouse) => self.handle_mouse_events(*mouse),
            EventType::Paste(text) => self.handle_paste_event(text),
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Coordinates are absolute; components keep the area they last rendered into.
    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    fn handle_paste_event(&mut self, _text: &str) -> Action {
        Action::None
    }

    /// Consume the actions this component understands, return the rest.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
