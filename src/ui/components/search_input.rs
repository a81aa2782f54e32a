//! Single-line search field.
//!
//! Every edit that changes the text reports the whole current string, never a
//! delta, as [`Action::UpdateResults`]. There is no debouncing here; rate
//! limiting, if any, belongs to whoever consumes the action.

use crate::constants::{SEARCH_PLACEHOLDER, SEARCH_TITLE};
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct SearchInput {
    value: String,
    focused: bool,
    theme: Theme,
}

impl SearchInput {
    pub fn new(theme: Theme) -> Self {
        Self {
            value: String::new(),
            focused: true,
            theme,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn changed(&self) -> Action {
        Action::UpdateResults(self.value.clone())
    }
}

impl Component for SearchInput {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('u') if ctrl => {
                if self.value.is_empty() {
                    Action::None
                } else {
                    self.value.clear();
                    self.changed()
                }
            }
            KeyCode::Char(_) if ctrl || alt => Action::None,
            KeyCode::Char(c) => {
                self.value.push(c);
                self.changed()
            }
            KeyCode::Backspace => match self.value.pop() {
                Some(_) => self.changed(),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    /// Pasted text lands as a single edit, control characters dropped.
    fn handle_paste_event(&mut self, text: &str) -> Action {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return Action::None;
        }
        self.value.push_str(&text);
        self.changed()
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(SEARCH_TITLE)
            .border_style(self.theme.border_style(self.focused));

        let icon = Span::styled(format!("{} ", self.theme.icons.search()), self.theme.muted_style());
        let prefix_width = icon.width() as u16;
        let inner = block.inner(rect);
        // One cell stays free for the cursor after the last character
        let text_width = inner.width.saturating_sub(prefix_width + 1) as usize;
        let visible = visible_tail(&self.value, text_width);

        let content = if self.value.is_empty() {
            Span::styled(
                SEARCH_PLACEHOLDER,
                self.theme.muted_style().add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(visible.to_string(), Style::default().fg(self.theme.text))
        };

        f.render_widget(Paragraph::new(Line::from(vec![icon, content])).block(block), rect);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let typed_width = Span::raw(visible).width() as u16;
            let x = (inner.x + prefix_width + typed_width).min(inner.x + inner.width.saturating_sub(1));
            f.set_cursor_position((x, inner.y));
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

/// Longest suffix of `value` that fits in `max_width` columns.
fn visible_tail(value: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = value.len();
    for (index, c) in value.char_indices().rev() {
        let mut buf = [0; 4];
        width += Span::raw(&*c.encode_utf8(&mut buf)).width();
        if width > max_width {
            break;
        }
        start = index;
    }
    &value[start..]
}
