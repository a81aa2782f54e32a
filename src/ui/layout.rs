//! Layout management and calculations

use crate::constants::SEARCH_INPUT_HEIGHT;
use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of the home screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub search: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Spacer row, search input, photo list (remainder), spacer/status row
    #[must_use]
    pub fn home_layout(area: Rect) -> HomeLayout {
        let [_, search, list, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        HomeLayout { search, list, status }
    }

    /// Whether a terminal cell lies within `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
