use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};

/// Built-in base theme, as named in settings and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Dark => Theme::dark(),
            ThemeName::Light => Theme::light(),
        }
    }
}

/// Hex colour overrides (`"#rrggbb"`), each optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub bg: Option<String>,
    pub fg: Option<String>,
    pub accent: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self { bg: Color::Rgb(11, 12, 13), fg: Color::Gray, accent: Color::Cyan, muted: Color::DarkGray }
    }

    pub fn light() -> Self {
        Self { bg: Color::White, fg: Color::Black, accent: Color::Blue, muted: Color::Gray }
    }

    pub fn style_fg(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Apply palette overrides. Unparseable entries leave the base colour.
    pub fn with_palette(mut self, p: &Palette) -> Self {
        if let Some(c) = p.bg.as_deref().and_then(parse_hex) {
            self.bg = c;
        }
        if let Some(c) = p.fg.as_deref().and_then(parse_hex) {
            self.fg = c;
        }
        if let Some(c) = p.accent.as_deref().and_then(parse_hex) {
            self.accent = c;
        }
        self
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.trim_start_matches('#');
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_overrides_only_valid_entries() {
        let p = Palette {
            bg: Some("#102030".into()),
            fg: Some("nonsense".into()),
            accent: None,
        };
        let t = Theme::dark().with_palette(&p);
        assert_eq!(t.bg, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(t.fg, Theme::dark().fg);
        assert_eq!(t.accent, Theme::dark().accent);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
        assert_eq!(ThemeName::Light.toggled().theme(), Theme::dark());
    }
}
