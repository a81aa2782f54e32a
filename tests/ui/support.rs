//! Shared fixtures for the UI tests.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pexelist::photos::Photo;
use pexelist::uri::UriHandler;
use ratatui::buffer::Buffer;

pub fn photo(photographer: &str, slug: &str) -> Photo {
    Photo {
        photographer: photographer.to_string(),
        photographer_url: format!("https://www.pexels.com/@{}", slug),
        url: format!("https://www.pexels.com/photo/{}/", slug),
        photo_url: format!("https://images.pexels.com/photos/{}/medium.jpeg", slug),
        alt: format!("{} description", slug),
        avg_color: "#978E82".to_string(),
    }
}

/// Remembers every URI it was asked to open.
#[derive(Clone, Default)]
pub struct RecordingUriHandler {
    pub opened: Rc<RefCell<Vec<String>>>,
}

impl UriHandler for RecordingUriHandler {
    fn open_uri(&self, uri: &str) {
        self.opened.borrow_mut().push(uri.to_string());
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn scroll_down() -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

/// Buffer rows as plain strings.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| (area.x..area.x + area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}
