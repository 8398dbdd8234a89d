use ratatui::style::Color;

use crate::model::config::NoteConfig;

/// How much of the original color survives while pinned, the terminal-cell
/// analogue of a 0.85 window opacity
const PIN_OPACITY: f32 = 0.85;

/// Color theme for the note and backdrop
#[derive(Debug, Clone)]
pub struct Theme {
    pub backdrop: Color,
    /// Note body background
    pub surface: Color,
    /// Title bar and input field background
    pub chrome: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub cursor_bg: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            backdrop: Color::Rgb(0x12, 0x12, 0x12),
            surface: Color::Rgb(0x2C, 0x2C, 0x2C),
            chrome: Color::Rgb(0x44, 0x44, 0x44),
            text: Color::Rgb(0xE0, 0xE0, 0xE0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x8A, 0x8A, 0x8A),
            highlight: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x5A, 0xF7, 0x8E),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            red: Color::Rgb(0xFF, 0x55, 0x55),
            cursor_bg: Color::Rgb(0x3C, 0x3C, 0x3C),
            selection_bg: Color::Rgb(0x55, 0x48, 0x22),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the config, falling back to defaults
    pub fn from_config(config: &NoteConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &config.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "backdrop" => theme.backdrop = color,
                    "surface" => theme.surface = color,
                    "chrome" => theme.chrome = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "green" => theme.green = color,
                    "yellow" => theme.yellow = color,
                    "red" => theme.red = color,
                    "cursor_bg" => theme.cursor_bg = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// The pinned rendition: every color blended toward the backdrop
    pub fn dimmed(&self) -> Theme {
        let toward = self.backdrop;
        Theme {
            backdrop: self.backdrop,
            surface: blend(self.surface, toward, PIN_OPACITY),
            chrome: blend(self.chrome, toward, PIN_OPACITY),
            text: blend(self.text, toward, PIN_OPACITY),
            text_bright: blend(self.text_bright, toward, PIN_OPACITY),
            dim: blend(self.dim, toward, PIN_OPACITY),
            highlight: blend(self.highlight, toward, PIN_OPACITY),
            green: blend(self.green, toward, PIN_OPACITY),
            yellow: blend(self.yellow, toward, PIN_OPACITY),
            red: blend(self.red, toward, PIN_OPACITY),
            cursor_bg: blend(self.cursor_bg, toward, PIN_OPACITY),
            selection_bg: blend(self.selection_bg, toward, PIN_OPACITY),
        }
    }
}

/// Mix `alpha` of `c` with the remainder of `toward`, per channel
fn blend(c: Color, toward: Color, alpha: f32) -> Color {
    match (c, toward) {
        (Color::Rgb(r, g, b), Color::Rgb(tr, tg, tb)) => {
            let mix = |a: u8, t: u8| (f32::from(a) * alpha + f32::from(t) * (1.0 - alpha)) as u8;
            Color::Rgb(mix(r, tr), mix(g, tg), mix(b, tb))
        }
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#FF4444"), Some(Color::Rgb(0xFF, 0x44, 0x44)));
        assert_eq!(parse_hex_color("FF4444"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn config_overrides_apply() {
        let mut colors = HashMap::new();
        colors.insert("surface".to_string(), "#101010".to_string());
        colors.insert("unknown".to_string(), "#101010".to_string());
        let config = NoteConfig {
            colors,
            ..Default::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.surface, Color::Rgb(0x10, 0x10, 0x10));
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn dimmed_moves_colors_toward_the_backdrop() {
        let theme = Theme::default();
        let dimmed = theme.dimmed();
        let (Color::Rgb(r, ..), Color::Rgb(dr, ..), Color::Rgb(br, ..)) =
            (theme.text_bright, dimmed.text_bright, theme.backdrop)
        else {
            panic!("expected rgb colors");
        };
        assert!(dr < r);
        assert!(dr > br);
        assert_eq!(dimmed.backdrop, theme.backdrop);
    }
}
