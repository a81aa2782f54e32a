//! Binds the home screen to the view-model.

use std::cell::RefCell;
use std::rc::Rc;

use crate::photos::PhotoFeed;
use crate::ui::core::{actions::Action, event_handler::EventType, Component};
use crate::ui::home_screen::HomeScreen;
use crate::ui::theme::Theme;
use crate::uri::UriHandler;
use crate::view_model::PhotosViewModel;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub struct PhotosScreen {
    home: HomeScreen,
    feed: PhotoFeed,
    view_model: Rc<RefCell<PhotosViewModel>>,
}

impl PhotosScreen {
    pub fn new(view_model: PhotosViewModel, theme: Theme, uri_handler: impl UriHandler + 'static) -> Self {
        let feed = view_model.photos_feed();
        let view_model = Rc::new(RefCell::new(view_model));

        let updater = Rc::clone(&view_model);
        let mut home = HomeScreen::new(
            theme,
            move |query| updater.borrow_mut().update_results(query),
            uri_handler,
        );
        home.set_photos(feed.latest());

        Self { home, feed, view_model }
    }

    pub fn home(&self) -> &HomeScreen {
        &self.home
    }

    pub fn should_quit(&self) -> bool {
        self.home.should_quit()
    }

    /// Apply the newest published photo list, if any arrived.
    ///
    /// Returns whether the screen changed.
    pub fn poll_feed(&mut self) -> bool {
        let busy = self.view_model.borrow().is_searching();
        self.home.set_busy(busy);

        match self.feed.poll() {
            Some(photos) => {
                log::debug!("Photos: applying snapshot of {} photos", photos.len());
                self.home.set_photos(photos);
                true
            }
            None => false,
        }
    }

    pub fn handle_event(&mut self, event: &EventType) {
        self.home.handle_event(event);
    }
}

impl Component for PhotosScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.home.handle_key_events(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.home.handle_mouse_events(mouse)
    }

    fn handle_paste_event(&mut self, text: &str) -> Action {
        self.home.handle_paste_event(text)
    }

    fn update(&mut self, action: Action) -> Action {
        self.home.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.home.render(f, rect);
    }
}
