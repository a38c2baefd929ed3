use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::theme::{apply_theme, load_theme, save_theme, Theme};

pub struct UseThemeResult {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Current theme, applied to the document whenever it changes
#[hook]
pub fn use_theme() -> UseThemeResult {
    let theme = use_state(load_theme);

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        use_callback(*theme, move |_, current: &Theme| {
            let next = current.toggled();
            save_theme(next);
            Logger::debug_with_component("theme", &format!("Switched to {} theme", next.as_str()));
            theme.set(next);
        })
    };

    UseThemeResult { theme: *theme, toggle }
}
