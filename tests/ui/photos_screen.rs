use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::KeyCode;
use pexelist::backend::{BackendError, PhotoBackend};
use pexelist::photos::Photo;
use pexelist::ui::core::EventType;
use pexelist::ui::{PhotosScreen, Theme};
use pexelist::view_model::PhotosViewModel;

use crate::support::{key, photo, RecordingUriHandler};

/// Curated returns two fixed photos; a search returns one photo named after the query.
struct EchoBackend;

#[async_trait]
impl PhotoBackend for EchoBackend {
    fn backend_type(&self) -> &str {
        "echo"
    }

    async fn search(&self, query: &str, _per_page: u32) -> Result<Vec<Photo>, BackendError> {
        Ok(vec![photo(query, query), photo("ana", "lake")])
    }

    async fn curated(&self, _per_page: u32) -> Result<Vec<Photo>, BackendError> {
        Ok(vec![photo("joey farina", "rocks"), photo("ana", "lake")])
    }
}

async fn wait_for_feed(screen: &mut PhotosScreen) {
    for _ in 0..400 {
        if screen.poll_feed() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("feed never changed");
}

fn names(screen: &PhotosScreen) -> Vec<String> {
    screen
        .home()
        .list()
        .cards()
        .iter()
        .map(|card| card.photo().photographer.clone())
        .collect()
}

#[tokio::test]
async fn test_screen_follows_view_model() {
    let mut view_model = PhotosViewModel::new(Arc::new(EchoBackend), 30);
    view_model.load_initial();
    let mut screen = PhotosScreen::new(view_model, Theme::default(), RecordingUriHandler::default());

    wait_for_feed(&mut screen).await;
    assert_eq!(names(&screen), ["joey farina", "ana"]);
    // Nothing new since the last poll
    assert!(!screen.poll_feed());

    // Expand "ana", then search: ana survives the refresh with its panel open
    screen.handle_event(&EventType::Key(key(KeyCode::Tab)));
    screen.handle_event(&EventType::Key(key(KeyCode::Char('j'))));
    screen.handle_event(&EventType::Key(key(KeyCode::Enter)));
    screen.handle_event(&EventType::Key(key(KeyCode::Tab)));
    screen.handle_event(&EventType::Key(key(KeyCode::Char('x'))));

    wait_for_feed(&mut screen).await;
    assert_eq!(names(&screen), ["x", "ana"]);
    let visible: Vec<bool> = screen.home().list().cards().iter().map(|c| c.details_visible()).collect();
    assert_eq!(visible, [false, true]);
    assert_eq!(screen.home().search().value(), "x");
}

#[tokio::test]
async fn test_quit_propagates() {
    let view_model = PhotosViewModel::new(Arc::new(EchoBackend), 30);
    let mut screen = PhotosScreen::new(view_model, Theme::default(), RecordingUriHandler::default());
    assert!(screen.home().list().is_empty());

    screen.handle_event(&EventType::Key(key(KeyCode::Esc)));
    assert!(screen.should_quit());
}
