//! Search input above the photo list.
//!
//! The home screen owns no data of its own: photos come in through
//! [`HomeScreen::set_photos`], query changes go out through the
//! `update_results` callback, and link activations go to the injected
//! [`UriHandler`].

use crate::constants::{HINT_LIST_FOCUSED, HINT_SEARCH_FOCUSED};
use crate::photos::Photo;
use crate::ui::components::{PhotoList, SearchInput};
use crate::ui::core::{
    actions::{Action, Focus},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::{HomeLayout, LayoutManager};
use crate::ui::theme::Theme;
use crate::uri::UriHandler;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};

pub struct HomeScreen {
    search: SearchInput,
    list: PhotoList,
    focus: Focus,
    theme: Theme,
    update_results: Box<dyn FnMut(String)>,
    uri_handler: Box<dyn UriHandler>,
    busy: bool,
    should_quit: bool,
    layout: Option<HomeLayout>,
}

impl HomeScreen {
    pub fn new(
        theme: Theme,
        update_results: impl FnMut(String) + 'static,
        uri_handler: impl UriHandler + 'static,
    ) -> Self {
        Self {
            search: SearchInput::new(theme.clone()),
            list: PhotoList::new(theme.clone()),
            focus: Focus::Search,
            theme,
            update_results: Box::new(update_results),
            uri_handler: Box::new(uri_handler),
            busy: false,
            should_quit: false,
            layout: None,
        }
    }

    pub fn set_photos(&mut self, photos: Vec<Photo>) {
        self.list.set_photos(photos);
    }

    /// Show a searching indicator in the status line.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    pub fn list(&self) -> &PhotoList {
        &self.list
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route one terminal event through the components and apply the result.
    ///
    /// Ticks drive the detail-panel reveals.
    pub fn handle_event(&mut self, event: &EventType) {
        if let EventType::Tick = event {
            self.tick();
            return;
        }
        let action = self.handle_events(event);
        self.update(action);
    }

    /// Advance running card transitions. Returns whether a redraw is due.
    pub fn tick(&mut self) -> bool {
        self.list.tick()
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        match focus {
            Focus::Search => {
                self.list.on_blur();
                self.search.on_focus();
            }
            Focus::List => {
                self.search.on_blur();
                self.list.on_focus();
            }
        }
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let text = if self.busy {
            "Searching..."
        } else {
            match self.focus {
                Focus::Search => HINT_SEARCH_FOCUSED,
                Focus::List => HINT_LIST_FOCUSED,
            }
        };

        let status = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(self.theme.muted_style());
        f.render_widget(status, area);
    }
}

impl Component for HomeScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                let next = match self.focus {
                    Focus::Search => Focus::List,
                    Focus::List => Focus::Search,
                };
                return Action::SetFocus(next);
            }
            // Arrows move the selection whichever half has focus
            KeyCode::Up | KeyCode::Down => return self.list.handle_key_events(key),
            _ => {}
        }

        match self.focus {
            Focus::Search => match key.code {
                KeyCode::Esc => Action::Quit,
                KeyCode::Enter => Action::SetFocus(Focus::List),
                _ => self.search.handle_key_events(key),
            },
            Focus::List => match key.code {
                KeyCode::Esc | KeyCode::Char('/') => Action::SetFocus(Focus::Search),
                KeyCode::Char('q') => Action::Quit,
                _ => self.list.handle_key_events(key),
            },
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some(layout) = self.layout else {
            return Action::None;
        };

        if LayoutManager::contains(layout.search, mouse.column, mouse.row) {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                return Action::SetFocus(Focus::Search);
            }
            return Action::None;
        }

        if LayoutManager::contains(layout.list, mouse.column, mouse.row) {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.set_focus(Focus::List);
            }
            return self.list.handle_mouse_events(mouse);
        }

        Action::None
    }

    fn handle_paste_event(&mut self, text: &str) -> Action {
        match self.focus {
            Focus::Search => self.search.handle_paste_event(text),
            Focus::List => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match self.list.update(action) {
            Action::UpdateResults(query) => {
                log::debug!("Home: query changed to '{}'", query);
                (self.update_results)(query);
                Action::None
            }
            Action::OpenUri(uri) => {
                self.uri_handler.open_uri(&uri);
                Action::None
            }
            Action::SetFocus(focus) => {
                self.set_focus(focus);
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::home_layout(rect);
        self.layout = Some(layout);

        self.search.render(f, layout.search);
        self.list.render(f, layout.list);
        self.render_status(f, layout.status);
    }
}
