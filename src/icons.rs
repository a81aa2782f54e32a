//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub search: &'static str,
    /// Left and right edge of the round avatar badge
    pub avatar_open: &'static str,
    pub avatar_close: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub link: &'static str,
    pub color_swatch: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                search: "🔍",
                avatar_open: "(",
                avatar_close: ")",
                expanded: "🔽",
                collapsed: "▶️",
                link: "🔗",
                color_swatch: "🎨",
            },
            IconTheme::Unicode => IconSet {
                search: "⌕",
                avatar_open: "◖",
                avatar_close: "◗",
                expanded: "▾",
                collapsed: "▸",
                link: "↗",
                color_swatch: "■",
            },
            IconTheme::Ascii => IconSet {
                search: ">",
                avatar_open: "(",
                avatar_close: ")",
                expanded: "v",
                collapsed: ">",
                link: "->",
                color_swatch: "#",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().search
    }

    #[must_use]
    pub fn link(&self) -> &'static str {
        self.icons().link
    }

    #[must_use]
    pub fn disclosure(&self, expanded: bool) -> &'static str {
        let icons = self.icons();
        if expanded {
            icons.expanded
        } else {
            icons.collapsed
        }
    }
}
