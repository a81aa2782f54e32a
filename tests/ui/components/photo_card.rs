use pexelist::ui::components::avatar::{initials, Avatar};
use pexelist::ui::components::{CardHit, DetailButton, DetailPanel, PhotoCard};
use pexelist::ui::Theme;

use crate::support::photo;

#[test]
fn test_card_starts_collapsed() {
    let card = PhotoCard::new(photo("joey farina", "rocks"));
    assert!(!card.details_visible());
    assert_eq!(card.height(), 1);
    assert_eq!(card.lines(false, &Theme::default()).len(), 1);
}

fn settle(card: &mut PhotoCard) {
    while card.tick() {}
}

#[test]
fn test_toggle_twice_restores() {
    let mut card = PhotoCard::new(photo("joey farina", "rocks"));

    card.toggle_details();
    settle(&mut card);
    assert!(card.details_visible());
    assert_eq!(card.height(), 1 + DetailPanel::HEIGHT);
    assert_eq!(card.lines(true, &Theme::default()).len(), 1 + DetailPanel::HEIGHT as usize);

    card.toggle_details();
    settle(&mut card);
    assert!(!card.details_visible());
    assert_eq!(card.height(), 1);
}

#[test]
fn test_details_slide_in_one_row_per_tick() {
    let theme = Theme::default();
    let mut card = PhotoCard::new(photo("joey farina", "rocks"));

    card.toggle_details();
    // The flag flips at once, the rows follow
    assert!(card.details_visible());
    assert!(card.is_animating());
    assert_eq!(card.height(), 1);

    for rows in 1..=DetailPanel::HEIGHT {
        assert!(card.tick());
        assert_eq!(card.revealed_rows(), rows);
        assert_eq!(card.height(), 1 + rows);
        assert_eq!(card.lines(false, &theme).len(), 1 + rows as usize);
    }
    assert!(!card.tick());
    assert!(!card.is_animating());

    card.toggle_details();
    assert!(!card.details_visible());
    assert_eq!(card.height(), 1 + DetailPanel::HEIGHT);
    for rows in (0..DetailPanel::HEIGHT).rev() {
        assert!(card.tick());
        assert_eq!(card.height(), 1 + rows);
    }
    assert!(!card.is_animating());
}

#[test]
fn test_reverse_mid_reveal() {
    let mut card = PhotoCard::new(photo("joey farina", "rocks"));
    card.toggle_details();
    card.tick();
    card.toggle_details();

    assert!(card.tick());
    assert_eq!(card.revealed_rows(), 0);
    assert!(!card.tick());
}

#[test]
fn test_header_shows_avatar_and_capitalised_name() {
    let card = PhotoCard::new(photo("joey farina", "rocks"));
    let header: String = card.lines(false, &Theme::default())[0]
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect();

    assert!(header.starts_with("(JF) Joey farina"), "header was {:?}", header);
}

#[test]
fn test_refreshed_keeps_visibility() {
    let mut card = PhotoCard::new(photo("joey farina", "rocks"));
    card.toggle_details();
    settle(&mut card);

    let mut updated = photo("joey farina", "rocks");
    updated.alt = "new caption".to_string();
    let card = card.refreshed(updated);

    assert!(card.details_visible());
    assert_eq!(card.height(), 1 + DetailPanel::HEIGHT);
    assert_eq!(card.photo().alt, "new caption");
}

#[test]
fn test_hit_test() {
    let theme = Theme::default();
    let mut card = PhotoCard::new(photo("joey farina", "rocks"));
    let avatar_width = Avatar::new(card.photo(), &theme).width();
    assert_eq!(avatar_width, 4);

    assert_eq!(card.hit_test(0, 0, &theme), CardHit::Avatar);
    assert_eq!(card.hit_test(0, 3, &theme), CardHit::Avatar);
    assert_eq!(card.hit_test(0, 5, &theme), CardHit::Name);
    // Collapsed cards have no button row
    assert_eq!(card.hit_test(3, 6, &theme), CardHit::Nothing);

    card.toggle_details();
    card.tick();
    card.tick();
    // Button row not revealed yet
    assert_eq!(card.hit_test(3, 6, &theme), CardHit::Nothing);

    card.tick();
    assert_eq!(card.hit_test(3, 6, &theme), CardHit::Button(DetailButton::ArtistLink));
    assert_eq!(card.hit_test(3, 30, &theme), CardHit::Button(DetailButton::PhotoLink));
    assert_eq!(card.hit_test(1, 6, &theme), CardHit::Nothing);
}

#[test]
fn test_initials() {
    assert_eq!(initials("joey farina"), "JF");
    assert_eq!(initials(""), "?");
    assert_eq!(initials("ümit  özdemir yılmaz"), "ÜÖ");
}
