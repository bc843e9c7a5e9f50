use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub warning: ColorSpec,
    pub footer_search: ColorSpec,
    pub footer_filters: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
        ColorSpec { r, g, b }
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

const THEME_NAMES: [&str; 3] = ["tokyo-night", "rose-pine-dawn", "gruvbox"];

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

impl Theme {
    /// Return the theme with the given name, or the default theme.
    ///
    pub fn by_name(name: &str) -> Theme {
        match name {
            "rose-pine-dawn" => Theme::rose_pine_dawn(),
            "gruvbox" => Theme::gruvbox(),
            _ => Theme::tokyo_night(),
        }
    }

    pub fn names() -> &'static [&'static str] {
        &THEME_NAMES
    }

    /// Return the theme following this one, wrapping around.
    ///
    pub fn next(&self) -> Theme {
        let index = THEME_NAMES
            .iter()
            .position(|n| *n == self.name)
            .unwrap_or(0);
        Theme::by_name(THEME_NAMES[(index + 1) % THEME_NAMES.len()])
    }

    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),    // Blue
            accent: ColorSpec::rgb(187, 154, 247),     // Magenta
            text: ColorSpec::rgb(192, 202, 245),       // Foreground
            text_muted: ColorSpec::rgb(86, 95, 137),   // Comment
            border_active: ColorSpec::rgb(125, 207, 255),
            border_normal: ColorSpec::rgb(59, 66, 97),
            warning: ColorSpec::rgb(224, 175, 104),
            footer_search: ColorSpec::rgb(224, 175, 104),
            footer_filters: ColorSpec::rgb(187, 154, 247),
            footer_normal: ColorSpec::rgb(122, 162, 247),
        }
    }

    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(40, 105, 131),     // Pine
            accent: ColorSpec::rgb(180, 99, 122),      // Love
            text: ColorSpec::rgb(87, 82, 121),
            text_muted: ColorSpec::rgb(152, 147, 165),
            border_active: ColorSpec::rgb(215, 130, 126),
            border_normal: ColorSpec::rgb(223, 218, 217),
            warning: ColorSpec::rgb(234, 157, 52),
            footer_search: ColorSpec::rgb(234, 157, 52),
            footer_filters: ColorSpec::rgb(144, 122, 169),
            footer_normal: ColorSpec::rgb(40, 105, 131),
        }
    }

    pub fn gruvbox() -> Self {
        Theme {
            name: "gruvbox".to_string(),
            primary: ColorSpec::rgb(131, 165, 152),
            accent: ColorSpec::rgb(211, 134, 155),
            text: ColorSpec::rgb(235, 219, 178),
            text_muted: ColorSpec::rgb(146, 131, 116),
            border_active: ColorSpec::rgb(250, 189, 47),
            border_normal: ColorSpec::rgb(80, 73, 69),
            warning: ColorSpec::rgb(254, 128, 25),
            footer_search: ColorSpec::rgb(254, 128, 25),
            footer_filters: ColorSpec::rgb(211, 134, 155),
            footer_normal: ColorSpec::rgb(131, 165, 152),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Theme::by_name("solarized"), Theme::default());
    }

    #[test]
    fn next_cycles_through_every_theme() {
        let mut theme = Theme::default();
        let mut seen = vec![];
        for _ in 0..Theme::names().len() {
            seen.push(theme.name.clone());
            theme = theme.next();
        }
        assert_eq!(seen, Theme::names());
        assert_eq!(theme.name, "tokyo-night");
    }
}
