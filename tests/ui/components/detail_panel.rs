use pexelist::constants::{BUTTON_ARTIST_LINK, BUTTON_PHOTO_LINK};
use pexelist::ui::components::{DetailButton, DetailPanel};
use pexelist::ui::Theme;

use crate::support::photo;

fn line_text(line: &ratatui::text::Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn test_buttons_target_the_photo_links() {
    let photo = photo("joey farina", "rocks");

    assert_eq!(DetailButton::ArtistLink.target(&photo), "https://www.pexels.com/@rocks");
    assert_eq!(DetailButton::PhotoLink.target(&photo), "https://www.pexels.com/photo/rocks/");
    assert_eq!(DetailButton::ArtistLink.label(), BUTTON_ARTIST_LINK);
    assert_eq!(DetailButton::PhotoLink.label(), BUTTON_PHOTO_LINK);
}

#[test]
fn test_lines_show_description_color_and_buttons() {
    let photo = photo("joey farina", "rocks");
    let theme = Theme::default();
    let lines = DetailPanel::new(&photo, &theme, 5).lines();

    assert_eq!(lines.len(), DetailPanel::HEIGHT as usize);
    assert_eq!(line_text(&lines[0]), "     rocks description");
    assert!(line_text(&lines[1]).ends_with("#978E82"));

    let buttons = line_text(&lines[DetailPanel::BUTTON_ROW as usize]);
    assert_eq!(buttons, "     [ -> Artist Link ]  [ -> Photo Link ]");
}

#[test]
fn test_button_at_columns() {
    let photo = photo("joey farina", "rocks");
    let theme = Theme::default();
    let panel = DetailPanel::new(&photo, &theme, 5);

    // "[ -> Artist Link ]" covers 5..23, gap 23..25, "[ -> Photo Link ]" covers 25..42
    assert_eq!(panel.button_at(4), None);
    assert_eq!(panel.button_at(5), Some(DetailButton::ArtistLink));
    assert_eq!(panel.button_at(22), Some(DetailButton::ArtistLink));
    assert_eq!(panel.button_at(23), None);
    assert_eq!(panel.button_at(25), Some(DetailButton::PhotoLink));
    assert_eq!(panel.button_at(41), Some(DetailButton::PhotoLink));
    assert_eq!(panel.button_at(42), None);
}
