//! Scrollbar for the photo list.
//!
//! Cards have different heights (collapsed, expanded or mid-reveal), so
//! everything here is measured in content rows: the thumb tracks the top row
//! of the selected card.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub struct ScrollbarHelper {
    state: ScrollbarState,
    color: Color,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::with_color(Color::DarkGray)
    }

    pub fn with_color(color: Color) -> Self {
        Self {
            state: ScrollbarState::new(0),
            color,
        }
    }

    /// Update the scrollbar state with current content information.
    ///
    /// # Arguments
    /// * `total_rows` - Content rows across all cards
    /// * `current_row` - Row the selection starts at (0-based)
    /// * `viewport_height` - Visible rows, for thumb sizing
    pub fn update_state(&mut self, total_rows: usize, current_row: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_rows).position(current_row);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    /// `true` when `total_rows` of content cannot fit in `available_height`.
    pub fn needs_scrollbar(total_rows: usize, available_height: usize) -> bool {
        total_rows > available_height
    }

    /// Split a bordered `rect` into (content_area, optional_scrollbar_area).
    ///
    /// The scrollbar takes the rightmost column and spans the rows between the
    /// top and bottom borders.
    pub fn calculate_areas(rect: Rect, total_rows: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize;

        if !Self::needs_scrollbar(total_rows, available_height) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(self.color))
                .thumb_style(Style::default().fg(self.color));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
