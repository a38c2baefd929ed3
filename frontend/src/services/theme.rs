//! Light/dark theme, persisted in local storage under [`THEME_STORAGE_KEY`]

use crate::services::logging::Logger;

pub const THEME_STORAGE_KEY: &str = "kinash_theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Stored value to theme; missing or unrecognised means light
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the toggle button: the sun offers a way back to light
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_theme() -> Theme {
    let stored = local_storage().and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::parse(stored.as_deref())
}

pub fn save_theme(theme: Theme) {
    let saved = local_storage()
        .map(|storage| storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_ok())
        .unwrap_or(false);
    if !saved {
        Logger::warn_with_component("theme", "Could not persist theme preference");
    }
}

/// Set `data-theme` on the document element so the stylesheet can switch palettes
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_light() {
        assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
        assert_eq!(Theme::parse(Some("light")), Theme::Light);
        assert_eq!(Theme::parse(Some("DARK")), Theme::Light);
        assert_eq!(Theme::parse(None), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores_theme_and_icon() {
        for start in [Theme::Light, Theme::Dark] {
            let flipped = start.toggled();
            assert_ne!(flipped, start);
            assert_ne!(flipped.icon_class(), start.icon_class());
            assert_eq!(flipped.toggled(), start);
            assert_eq!(flipped.toggled().icon_class(), start.icon_class());
        }
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    }
}
