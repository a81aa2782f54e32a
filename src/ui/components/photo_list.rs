//! Scrollable list of photo cards.
//!
//! The list renders one [`PhotoCard`] per photo, in the order received. When a
//! new snapshot arrives, cards whose photo is still present (same
//! [`Photo::key`]) keep their detail visibility, regardless of where they moved
//! to; photos that are new start collapsed.

use crate::constants::PHOTOS_TITLE;
use crate::photos::Photo;
use crate::ui::components::detail_panel::DetailButton;
use crate::ui::components::photo_card::{CardHit, PhotoCard};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    text::{Line, Text},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};
use std::collections::HashMap;

pub struct PhotoList {
    cards: Vec<PhotoCard>,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    theme: Theme,
    focused: bool,
    /// Inner area of the last render, for mouse hit-testing
    content_area: Rect,
}

impl PhotoList {
    pub fn new(theme: Theme) -> Self {
        Self {
            cards: Vec::new(),
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::with_color(theme.border),
            theme,
            focused: false,
            content_area: Rect::default(),
        }
    }

    /// Replace the rendered photos with a new snapshot.
    pub fn set_photos(&mut self, photos: Vec<Photo>) {
        let mut previous: HashMap<String, PhotoCard> = HashMap::with_capacity(self.cards.len());
        for card in self.cards.drain(..) {
            previous.entry(card.photo().key().to_string()).or_insert(card);
        }

        self.cards = photos
            .into_iter()
            .map(|photo| match previous.remove(photo.key()) {
                Some(card) => card.refreshed(photo),
                None => PhotoCard::new(photo),
            })
            .collect();

        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.cards.is_empty() {
            self.list_state.select(None);
            *self.list_state.offset_mut() = 0;
        } else {
            let selected = self.list_state.selected().unwrap_or(0).min(self.cards.len() - 1);
            self.list_state.select(Some(selected));
        }
    }

    pub fn cards(&self) -> &[PhotoCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn select(&mut self, index: usize) {
        if index < self.cards.len() {
            self.list_state.select(Some(index));
        }
    }

    pub fn next_photo(&mut self) {
        if !self.cards.is_empty() {
            let next = self.list_state.selected().map_or(0, |i| (i + 1) % self.cards.len());
            self.list_state.select(Some(next));
        }
    }

    pub fn previous_photo(&mut self) {
        if !self.cards.is_empty() {
            let previous = match self.list_state.selected() {
                Some(0) | None => self.cards.len() - 1,
                Some(i) => i - 1,
            };
            self.list_state.select(Some(previous));
        }
    }

    /// Toggle the detail panel of the card at `index`.
    pub fn toggle_details(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.toggle_details();
        }
    }

    /// Advance every card's detail reveal by one row.
    ///
    /// Returns whether any card changed height.
    pub fn tick(&mut self) -> bool {
        self.cards.iter_mut().fold(false, |changed, card| card.tick() || changed)
    }

    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(PhotoCard::is_animating)
    }

    /// Total rows of card content, spacing included.
    pub fn content_rows(&self) -> usize {
        self.cards
            .iter()
            .map(|card| (card.height() + self.theme.card_spacing) as usize)
            .sum()
    }

    /// First content row of the selected card.
    pub fn selected_row(&self) -> usize {
        let selected = self.list_state.selected().unwrap_or(0);
        self.cards
            .iter()
            .take(selected)
            .map(|card| (card.height() + self.theme.card_spacing) as usize)
            .sum()
    }

    /// Open-link action for the selected card, if its buttons are showing.
    fn activate_selected(&self, button: DetailButton) -> Action {
        match self.list_state.selected().and_then(|i| self.cards.get(i)) {
            Some(card) if card.details_visible() => Action::OpenUri(button.target(card.photo()).to_string()),
            _ => Action::None,
        }
    }

    /// Map a screen position to (card index, row within card, column within card).
    fn locate(&self, column: u16, row: u16) -> Option<(usize, u16, u16)> {
        let area = self.content_area;
        if !LayoutManager::contains(area, column, row) {
            return None;
        }

        let target_row = row - area.y;
        let mut top = 0u16;
        for (index, card) in self.cards.iter().enumerate().skip(self.list_state.offset()) {
            let height = card.height() + self.theme.card_spacing;
            if target_row < top + height {
                let card_row = target_row - top;
                if card_row >= card.height() {
                    // Click on the spacing below a card
                    return None;
                }
                return Some((index, card_row, column - area.x));
            }
            top += height;
        }
        None
    }
}

impl Component for PhotoList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextPhoto,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousPhoto,
            KeyCode::Home | KeyCode::Char('g') => {
                self.select(0);
                Action::None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.select(self.cards.len().saturating_sub(1));
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(index) = self.list_state.selected() {
                    self.toggle_details(index);
                }
                Action::None
            }
            KeyCode::Char('a') => self.activate_selected(DetailButton::ArtistLink),
            KeyCode::Char('p') => self.activate_selected(DetailButton::PhotoLink),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((index, row, column)) = self.locate(mouse.column, mouse.row) else {
                    return Action::None;
                };
                self.list_state.select(Some(index));

                match self.cards[index].hit_test(row, column, &self.theme) {
                    CardHit::Avatar | CardHit::Name => {
                        self.toggle_details(index);
                        Action::None
                    }
                    CardHit::Button(button) => Action::OpenUri(button.target(self.cards[index].photo()).to_string()),
                    CardHit::Nothing => Action::None,
                }
            }
            MouseEventKind::ScrollDown => Action::NextPhoto,
            MouseEventKind::ScrollUp => Action::PreviousPhoto,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextPhoto => {
                self.next_photo();
                Action::None
            }
            Action::PreviousPhoto => {
                self.previous_photo();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let selected = self.list_state.selected();
        let spacing = self.theme.card_spacing as usize;

        let items: Vec<ListItem> = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let mut lines = card.lines(selected == Some(index), &self.theme);
                lines.extend(std::iter::repeat_with(|| Line::from("")).take(spacing));
                ListItem::new(Text::from(lines))
            })
            .collect();

        let total_rows = self.content_rows();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_rows);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!("{}({}) ", PHOTOS_TITLE, self.cards.len()))
            .border_style(self.theme.border_style(self.focused));
        self.content_area = block.inner(list_area);

        f.render_stateful_widget(List::new(items).block(block), list_area, &mut self.list_state);

        self.scrollbar_helper.update_state(
            total_rows,
            self.selected_row(),
            Some(self.content_area.height as usize),
        );
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
