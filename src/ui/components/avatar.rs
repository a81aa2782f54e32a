//! Round photographer badge shown at the start of every card.

use crate::photos::Photo;
use crate::ui::theme::Theme;
use crate::utils::color::{contrast_color, parse_hex_color};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Up to two uppercase initials, `?` for an empty name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

pub struct Avatar<'a> {
    photo: &'a Photo,
    theme: &'a Theme,
}

impl<'a> Avatar<'a> {
    pub fn new(photo: &'a Photo, theme: &'a Theme) -> Self {
        Self { photo, theme }
    }

    /// Badge spans: rounded edges around the initials, filled with the
    /// photo's average color when it has one.
    pub fn spans(&self) -> Vec<Span<'static>> {
        let icons = self.theme.icons.icons();
        let text = format!("{:^2}", initials(&self.photo.photographer));

        let (edge, face) = match parse_hex_color(&self.photo.avg_color) {
            Some(fill) => (
                Style::default().fg(fill),
                Style::default()
                    .bg(fill)
                    .fg(contrast_color(fill))
                    .add_modifier(Modifier::BOLD),
            ),
            None => (
                Style::default().fg(self.theme.muted),
                Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD),
            ),
        };

        vec![
            Span::styled(icons.avatar_open, edge),
            Span::styled(text, face),
            Span::styled(icons.avatar_close, edge),
        ]
    }

    /// Display columns the badge occupies.
    pub fn width(&self) -> u16 {
        self.spans().iter().map(|span| span.width() as u16).sum()
    }
}
