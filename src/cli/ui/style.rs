use std::{io::IsTerminal, sync::RwLock};

use colored::{Color, Colorize};
use once_cell::sync::Lazy;

use crate::cli::output::current_preferences;

const FALLBACK_WIDTH: usize = 60;
const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 80;

#[derive(Clone, Debug)]
pub struct UiStyle {
    pub header_prefix: String,
    pub horizontal: char,
    pub use_color: bool,
    pub plain_mode: bool,
    pub use_icons: bool,
    pub width: usize,
}

static STYLE: Lazy<RwLock<UiStyle>> = Lazy::new(|| RwLock::new(UiStyle::detect()));

pub fn style() -> UiStyle {
    STYLE
        .read()
        .map(|guard| guard.clone())
        .unwrap_or_else(|_| UiStyle::detect())
}

/// Re-reads output preferences and terminal capabilities.
pub fn refresh_style() {
    let detected = UiStyle::detect();
    colored::control::set_override(detected.use_color);
    if let Ok(mut guard) = STYLE.write() {
        *guard = detected;
    }
}

impl UiStyle {
    fn detect() -> Self {
        let prefs = current_preferences();
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let use_color = stdout_tty && prefs.color_enabled && !prefs.plain_mode && !no_color;
        let width = if stdout_tty {
            crossterm::terminal::size()
                .map(|(columns, _)| usize::from(columns).clamp(MIN_WIDTH, MAX_WIDTH))
                .unwrap_or(FALLBACK_WIDTH)
        } else {
            FALLBACK_WIDTH
        };

        Self {
            header_prefix: if prefs.plain_mode { "> ".into() } else { "⮞ ".into() },
            horizontal: if prefs.plain_mode { '-' } else { '─' },
            use_color,
            plain_mode: prefs.plain_mode,
            use_icons: prefs.use_icons && !prefs.plain_mode,
            width,
        }
    }

    /// Style for rendering without a terminal, used by screen tests.
    pub fn plain() -> Self {
        Self {
            header_prefix: "> ".into(),
            horizontal: '-',
            use_color: false,
            plain_mode: true,
            use_icons: false,
            width: FALLBACK_WIDTH,
        }
    }

    pub fn horizontal_line(&self) -> String {
        self.horizontal.to_string().repeat(self.width)
    }

    pub fn header(&self, title: &str) -> String {
        let prefixed = format!("{}{}", self.header_prefix, title);
        if self.use_color {
            prefixed.color(Color::BrightBlue).bold().to_string()
        } else {
            prefixed
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn muted(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Icon followed by a space, or nothing when icons are disabled.
    pub fn icon(&self, glyph: &str) -> String {
        if self.use_icons {
            format!("{glyph} ")
        } else {
            String::new()
        }
    }

    /// `[#####.....]` bar for `fraction` in `0.0..=1.0`; overshoot is capped.
    pub fn progress_bar(&self, fraction: f64, cells: usize) -> String {
        let clamped = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (clamped * cells as f64).round() as usize;
        let (full, empty) = if self.plain_mode { ('#', '.') } else { ('█', '░') };
        format!(
            "[{}{}]",
            full.to_string().repeat(filled),
            empty.to_string().repeat(cells - filled)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_caps_overshoot() {
        let style = UiStyle::plain();
        assert_eq!(style.progress_bar(0.5, 10), "[#####.....]");
        assert_eq!(style.progress_bar(1.5, 4), "[####]");
        assert_eq!(style.progress_bar(f64::NAN, 4), "[....]");
    }

    #[test]
    fn plain_style_has_no_icons() {
        let style = UiStyle::plain();
        assert_eq!(style.icon("✈"), "");
        assert_eq!(style.header("Idikhar"), "> Idikhar");
    }
}
