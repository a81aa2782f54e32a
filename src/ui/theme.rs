//! Resolved colors and spacing handed to every component.

use crate::config::ThemeConfig;
use crate::icons::IconService;
use crate::utils::color::parse_color;
use anyhow::{anyhow, Result};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub card_spacing: u16,
    pub icons: IconService,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Yellow,
            text: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            card_spacing: 1,
            icons: IconService::default(),
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig, icons: IconService) -> Result<Self> {
        let resolve = |name: &str, value: &str| {
            parse_color(value).ok_or_else(|| anyhow!("Invalid theme color for '{}': '{}'", name, value))
        };

        Ok(Self {
            accent: resolve("accent", &config.accent)?,
            text: resolve("text", &config.text)?,
            muted: resolve("muted", &config.muted)?,
            border: resolve("border", &config.border)?,
            card_spacing: config.card_spacing,
            icons,
        })
    }

    pub fn text_style(&self, selected: bool) -> Style {
        if selected {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }
}
