//! Catppuccin Mocha theme for the gwt TUI
//!
//! Palette reference: https://catppuccin.com/palette/

use super::state::NoticeKind;
use ratatui::style::{Color, Modifier, Style};

/// Catppuccin Mocha colors used by the list views
#[derive(Debug, Clone)]
pub struct Theme {
    // Accents
    pub mauve: Color,
    pub lavender: Color,
    pub sky: Color,
    pub blue: Color,
    pub green: Color,
    pub peach: Color,
    pub red: Color,
    pub yellow: Color,

    // Text hierarchy
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub surface: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    pub fn mocha() -> Self {
        Self {
            mauve: Color::Rgb(203, 166, 247),    // Mauve #cba6f7
            lavender: Color::Rgb(180, 190, 254), // Lavender #b4befe
            sky: Color::Rgb(137, 220, 235),      // Sky #89dceb
            blue: Color::Rgb(137, 180, 250),     // Blue #89b4fa
            green: Color::Rgb(166, 227, 161),    // Green #a6e3a1
            peach: Color::Rgb(250, 179, 135),    // Peach #fab387
            red: Color::Rgb(243, 139, 168),      // Red #f38ba8
            yellow: Color::Rgb(249, 226, 175),   // Yellow #f9e2af

            text_primary: Color::Rgb(205, 214, 244),   // Text #cdd6f4
            text_secondary: Color::Rgb(186, 194, 222), // Subtext 1 #bac2de
            text_muted: Color::Rgb(108, 112, 134),     // Overlay 0 #6c7086
            surface: Color::Rgb(88, 91, 112),          // Surface 2 #585b70
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.mauve)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.lavender)
            .add_modifier(Modifier::BOLD)
    }

    /// Title line of the row under the cursor
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.mauve)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Rows that name an action rather than a worktree or branch
    pub fn action_style(&self) -> Style {
        Style::default().fg(self.green)
    }

    /// Delete prompt overlaid on a row
    pub fn confirm_style(&self) -> Style {
        Style::default().fg(self.red).add_modifier(Modifier::BOLD)
    }

    pub fn value_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn help_style(&self) -> Style {
        Style::default().fg(self.surface)
    }

    /// Color of a `Label:` prefix in a row description
    pub fn label_color(&self, label: &str) -> Color {
        match label {
            "Branch" => self.sky,
            "Path" => self.green,
            "Tracking" => self.blue,
            "Remote" => self.peach,
            "Yes" => self.green,
            "No" => self.red,
            _ => self.text_muted,
        }
    }

    pub fn notice_style(&self, kind: NoticeKind) -> Style {
        match kind {
            NoticeKind::Info => Style::default().fg(self.yellow),
            NoticeKind::Error => Style::default().fg(self.red).add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        // Catppuccin Mocha Mauve #cba6f7
        assert_eq!(theme.mauve, Color::Rgb(203, 166, 247));
        assert_eq!(theme.label_color("Path"), theme.green);
        assert_eq!(theme.label_color("Unknown"), theme.text_muted);
    }
}
