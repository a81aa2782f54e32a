//! One row-plus-detail unit of the photo list.

use crate::photos::Photo;
use crate::ui::components::avatar::Avatar;
use crate::ui::components::detail_panel::{DetailButton, DetailPanel};
use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};

/// What a click at a given card-relative position landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    Avatar,
    Name,
    Button(DetailButton),
    Nothing,
}

/// A photo plus the card's own detail-visibility flag.
///
/// The flag is private to the card: it changes only through
/// [`PhotoCard::toggle_details`]. The panel rows slide in and out behind the
/// flag, one row per [`PhotoCard::tick`]; that reveal progress is transient
/// and never outlives the card.
#[derive(Debug, Clone)]
pub struct PhotoCard {
    photo: Photo,
    details_visible: bool,
    /// Detail rows currently shown, 0..=DetailPanel::HEIGHT
    revealed: u16,
}

impl PhotoCard {
    pub fn new(photo: Photo) -> Self {
        Self {
            photo,
            details_visible: false,
            revealed: 0,
        }
    }

    /// Rebuild this card around a newer snapshot of the same photo.
    pub fn refreshed(self, photo: Photo) -> Self {
        Self { photo, ..self }
    }

    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    pub fn details_visible(&self) -> bool {
        self.details_visible
    }

    pub fn toggle_details(&mut self) {
        self.details_visible = !self.details_visible;
    }

    /// Detail rows on screen right now.
    pub fn revealed_rows(&self) -> u16 {
        self.revealed
    }

    /// Whether the panel is still sliding towards its target.
    pub fn is_animating(&self) -> bool {
        self.revealed != self.target_rows()
    }

    /// Advance the reveal by one row. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        let target = self.target_rows();
        if self.revealed < target {
            self.revealed += 1;
            true
        } else if self.revealed > target {
            self.revealed -= 1;
            true
        } else {
            false
        }
    }

    fn target_rows(&self) -> u16 {
        if self.details_visible {
            DetailPanel::HEIGHT
        } else {
            0
        }
    }

    /// Rows this card occupies, without inter-card spacing.
    pub fn height(&self) -> u16 {
        1 + self.revealed
    }

    pub fn lines(&self, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
        let avatar = Avatar::new(&self.photo, theme);
        let indent = avatar.width() + 1;

        let mut header = avatar.spans();
        header.push(Span::raw(" "));
        header.push(Span::styled(self.photo.display_name(), theme.text_style(selected)));
        header.push(Span::styled(
            format!(" {}", theme.icons.disclosure(self.details_visible)),
            theme.muted_style(),
        ));

        let mut lines = vec![Line::from(header)];
        if self.revealed > 0 {
            lines.extend(
                DetailPanel::new(&self.photo, theme, indent)
                    .lines()
                    .into_iter()
                    .take(self.revealed as usize),
            );
        }
        lines
    }

    /// Resolve a click at (`row`, `column`) relative to the card's top-left.
    pub fn hit_test(&self, row: u16, column: u16, theme: &Theme) -> CardHit {
        let avatar = Avatar::new(&self.photo, theme);
        let avatar_width = avatar.width();

        if row == 0 {
            // The name label spans the rest of the header row
            return if column < avatar_width {
                CardHit::Avatar
            } else {
                CardHit::Name
            };
        }

        // Buttons only answer once their row has slid in
        if self.revealed > DetailPanel::BUTTON_ROW && row == 1 + DetailPanel::BUTTON_ROW {
            let panel = DetailPanel::new(&self.photo, theme, avatar_width + 1);
            if let Some(button) = panel.button_at(column) {
                return CardHit::Button(button);
            }
        }

        CardHit::Nothing
    }
}
