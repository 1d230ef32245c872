use crossterm::style::Color;
use once_cell::sync::OnceCell;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

pub struct Theme {
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub hint: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            accent: Color::Blue,
            success: Color::DarkGreen,
            warning: Color::DarkYellow,
            error: Color::DarkRed,
            hint: Color::DarkGrey,
        }
    }

    pub fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            hint: Color::Grey,
        }
    }
}

impl From<ThemeKind> for Theme {
    fn from(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }
}

static THEME: OnceCell<Theme> = OnceCell::new();

pub fn configure_theme(kind: ThemeKind) {
    let _ = THEME.set(Theme::from(kind));
}

pub fn get_theme() -> &'static Theme {
    THEME.get_or_init(Theme::dark)
}

pub fn detect_theme_kind_from_env() -> ThemeKind {
    theme_kind_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

// COLORFGBG looks like "15;0" (fg;bg) or "default;8"
fn theme_kind_from_colorfgbg(value: Option<&str>) -> ThemeKind {
    let background = value
        .and_then(|v| v.split(';').next_back())
        .and_then(|bg| bg.parse::<u8>().ok());

    match background {
        Some(bg) if bg >= 8 => ThemeKind::Light,
        Some(_) => ThemeKind::Dark,
        None => ThemeKind::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_background_from_last_component() {
        assert_eq!(theme_kind_from_colorfgbg(Some("0;15")), ThemeKind::Light);
        assert_eq!(theme_kind_from_colorfgbg(Some("15;0")), ThemeKind::Dark);
        assert_eq!(theme_kind_from_colorfgbg(Some("default;8")), ThemeKind::Light);
    }

    #[test]
    fn falls_back_to_dark() {
        assert_eq!(theme_kind_from_colorfgbg(None), ThemeKind::Dark);
        assert_eq!(theme_kind_from_colorfgbg(Some("default")), ThemeKind::Dark);
    }
}
