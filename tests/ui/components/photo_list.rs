use crossterm::event::KeyCode;
use pexelist::ui::components::{DetailPanel, PhotoList};
use pexelist::ui::core::{Action, Component};
use pexelist::ui::Theme;
use ratatui::{backend::TestBackend, Terminal};

use crate::support::{buffer_lines, click, key, photo, scroll_down};

fn list_with(slugs: &[&str]) -> PhotoList {
    let mut list = PhotoList::new(Theme::default());
    list.set_photos(slugs.iter().map(|slug| photo(slug, slug)).collect());
    list
}

fn visible(list: &PhotoList) -> Vec<bool> {
    list.cards().iter().map(|card| card.details_visible()).collect()
}

#[test]
fn test_one_card_per_photo_in_order() {
    let list = list_with(&["a", "b", "c", "d"]);

    assert_eq!(list.len(), 4);
    let names: Vec<&str> = list.cards().iter().map(|c| c.photo().photographer.as_str()).collect();
    assert_eq!(names, ["a", "b", "c", "d"]);
    assert_eq!(list.selected_index(), Some(0));
}

#[test]
fn test_empty_list() {
    let mut list = list_with(&[]);
    assert!(list.is_empty());
    assert_eq!(list.selected_index(), None);

    list.next_photo();
    list.toggle_details(0);
    assert_eq!(list.selected_index(), None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('p'))), Action::None);
}

#[test]
fn test_toggles_are_independent() {
    let mut list = list_with(&["a", "b", "c"]);

    list.toggle_details(1);
    assert_eq!(visible(&list), [false, true, false]);

    list.toggle_details(0);
    list.toggle_details(1);
    assert_eq!(visible(&list), [true, false, false]);
}

#[test]
fn test_visibility_follows_photo_identity() {
    let mut list = list_with(&["a", "b"]);
    list.toggle_details(0);

    // [A, B] -> [A, C]: A keeps its panel, C starts collapsed
    list.set_photos(vec![photo("a", "a"), photo("c", "c")]);
    assert_eq!(visible(&list), [true, false]);

    // A moving position takes its state along
    list.set_photos(vec![photo("c", "c"), photo("a", "a")]);
    assert_eq!(visible(&list), [false, true]);

    // Gone and back again, A is a new card
    list.set_photos(vec![photo("c", "c")]);
    list.set_photos(vec![photo("a", "a")]);
    assert_eq!(visible(&list), [false]);
}

#[test]
fn test_duplicate_photos_share_first_state() {
    let mut list = list_with(&["a", "a"]);
    list.toggle_details(0);

    list.set_photos(vec![photo("a", "a"), photo("a", "a")]);
    assert_eq!(visible(&list), [true, false]);
}

#[test]
fn test_selection_clamps_when_list_shrinks() {
    let mut list = list_with(&["a", "b", "c"]);
    list.select(2);

    list.set_photos(vec![photo("a", "a")]);
    assert_eq!(list.selected_index(), Some(0));

    list.set_photos(Vec::new());
    assert_eq!(list.selected_index(), None);
}

#[test]
fn test_navigation_wraps() {
    let mut list = list_with(&["a", "b", "c"]);

    assert_eq!(list.handle_key_events(key(KeyCode::Up)), Action::PreviousPhoto);
    assert_eq!(list.update(Action::PreviousPhoto), Action::None);
    assert_eq!(list.selected_index(), Some(2));

    list.update(Action::NextPhoto);
    assert_eq!(list.selected_index(), Some(0));

    list.handle_key_events(key(KeyCode::End));
    assert_eq!(list.selected_index(), Some(2));
    list.handle_key_events(key(KeyCode::Char('g')));
    assert_eq!(list.selected_index(), Some(0));

    // Unrelated actions pass through
    assert_eq!(list.update(Action::Quit), Action::Quit);
}

#[test]
fn test_link_keys_need_visible_details() {
    let mut list = list_with(&["a", "b"]);
    list.select(1);

    assert_eq!(list.handle_key_events(key(KeyCode::Char('a'))), Action::None);

    list.handle_key_events(key(KeyCode::Enter));
    assert_eq!(visible(&list), [false, true]);
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('a'))),
        Action::OpenUri("https://www.pexels.com/@b".to_string())
    );
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('p'))),
        Action::OpenUri("https://www.pexels.com/photo/b/".to_string())
    );

    list.handle_key_events(key(KeyCode::Char(' ')));
    assert_eq!(visible(&list), [false, false]);
}

#[test]
fn test_render_and_click() {
    let mut list = list_with(&["ana", "bo"]);
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    terminal.draw(|f| list.render(f, f.area())).unwrap();

    let lines = buffer_lines(terminal.backend().buffer());
    assert!(lines[0].contains("Photos (2)"));
    assert!(lines[1].contains("Ana"));
    assert!(lines[3].contains("Bo"));

    // Second card's avatar: row 1 border + 1 card + 1 spacing
    assert_eq!(list.handle_mouse_events(click(2, 3)), Action::None);
    assert_eq!(list.selected_index(), Some(1));
    assert_eq!(visible(&list), [false, true]);

    while list.tick() {}
    terminal.draw(|f| list.render(f, f.area())).unwrap();
    // Button row of the expanded second card, on "Photo Link"
    assert_eq!(
        list.handle_mouse_events(click(30, 6)),
        Action::OpenUri("https://www.pexels.com/photo/bo/".to_string())
    );

    // Spacing row and border hit nothing
    assert_eq!(list.handle_mouse_events(click(2, 2)), Action::None);
    assert_eq!(list.handle_mouse_events(click(0, 0)), Action::None);
    assert_eq!(visible(&list), [false, true]);

    assert_eq!(list.handle_mouse_events(scroll_down()), Action::NextPhoto);
}

#[test]
fn test_tick_advances_every_card() {
    let mut list = list_with(&["a", "b", "c"]);
    assert!(!list.tick());

    list.toggle_details(0);
    list.toggle_details(2);
    assert!(list.is_animating());
    for _ in 0..DetailPanel::HEIGHT {
        assert!(list.tick());
    }
    assert!(!list.is_animating());
    let rows: Vec<u16> = list.cards().iter().map(|c| c.revealed_rows()).collect();
    assert_eq!(rows, [DetailPanel::HEIGHT, 0, DetailPanel::HEIGHT]);
}

#[test]
fn test_scroll_metrics_are_rows() {
    let slugs: Vec<String> = (0..30).map(|i| format!("p{}", i)).collect();
    let slugs: Vec<&str> = slugs.iter().map(String::as_str).collect();
    let mut list = list_with(&slugs);

    // 30 collapsed cards, one spacing row each
    assert_eq!(list.content_rows(), 60);
    list.select(10);
    assert_eq!(list.selected_row(), 20);

    list.toggle_details(0);
    while list.tick() {}
    assert_eq!(list.content_rows(), 60 + DetailPanel::HEIGHT as usize);
    assert_eq!(list.selected_row(), 20 + DetailPanel::HEIGHT as usize);
}
