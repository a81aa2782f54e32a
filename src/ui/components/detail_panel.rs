//! Expanded metadata under a card: description, average color and links.

use crate::constants::{BUTTON_ARTIST_LINK, BUTTON_PHOTO_LINK};
use crate::photos::Photo;
use crate::ui::theme::Theme;
use crate::utils::color::parse_hex_color;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Gap between the two link buttons
const BUTTON_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailButton {
    ArtistLink,
    PhotoLink,
}

impl DetailButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::ArtistLink => BUTTON_ARTIST_LINK,
            Self::PhotoLink => BUTTON_PHOTO_LINK,
        }
    }

    /// URL this button opens for `photo`.
    pub fn target(self, photo: &Photo) -> &str {
        match self {
            Self::ArtistLink => &photo.photographer_url,
            Self::PhotoLink => &photo.url,
        }
    }
}

pub struct DetailPanel<'a> {
    photo: &'a Photo,
    theme: &'a Theme,
    indent: u16,
}

impl<'a> DetailPanel<'a> {
    /// Rows: description, color, buttons
    pub const HEIGHT: u16 = 3;
    /// Row (within the panel) holding the buttons
    pub const BUTTON_ROW: u16 = 2;

    pub fn new(photo: &'a Photo, theme: &'a Theme, indent: u16) -> Self {
        Self { photo, theme, indent }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let pad = || Span::raw(" ".repeat(self.indent as usize));

        let description = Line::from(vec![
            pad(),
            Span::styled(
                self.photo.alt.clone(),
                Style::default().fg(self.theme.text).add_modifier(Modifier::ITALIC),
            ),
        ]);

        let swatch_style = match parse_hex_color(&self.photo.avg_color) {
            Some(color) => Style::default().fg(color),
            None => self.theme.muted_style(),
        };
        let color = Line::from(vec![
            pad(),
            Span::styled(format!("{} ", self.theme.icons.icons().color_swatch), swatch_style),
            Span::styled(self.photo.avg_color.clone(), self.theme.muted_style()),
        ]);

        let button_style = Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD);
        let buttons = Line::from(vec![
            pad(),
            Span::styled(self.button_text(DetailButton::ArtistLink), button_style),
            Span::raw(" ".repeat(BUTTON_GAP as usize)),
            Span::styled(self.button_text(DetailButton::PhotoLink), button_style),
        ]);

        vec![description, color, buttons]
    }

    fn button_text(&self, button: DetailButton) -> String {
        format!("[ {} {} ]", self.theme.icons.link(), button.label())
    }

    fn button_width(&self, button: DetailButton) -> u16 {
        Span::raw(self.button_text(button)).width() as u16
    }

    /// Button under `column` on the button row, columns relative to the card.
    pub fn button_at(&self, column: u16) -> Option<DetailButton> {
        let artist_start = self.indent;
        let artist_end = artist_start + self.button_width(DetailButton::ArtistLink);
        let photo_start = artist_end + BUTTON_GAP;
        let photo_end = photo_start + self.button_width(DetailButton::PhotoLink);

        if (artist_start..artist_end).contains(&column) {
            Some(DetailButton::ArtistLink)
        } else if (photo_start..photo_end).contains(&column) {
            Some(DetailButton::PhotoLink)
        } else {
            None
        }
    }
}
