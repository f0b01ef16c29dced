use yew::prelude::*;
use shared::{ThemeConfig, ThemeController, ThemeMode};
use crate::services::browser::{DocumentTheme, LocalStorageStore};
use crate::services::logging::Logger;

pub type BrowserThemeController = ThemeController<LocalStorageStore, DocumentTheme>;

pub struct UseThemeResult {
    pub mode: ThemeMode,
    pub toggle: Callback<()>,
}

/// Owns the page's theme controller. The initial mode is resolved while the
/// root component's state is created, so the document class is set before
/// the first paint.
#[hook]
pub fn use_theme(config: &ThemeConfig) -> UseThemeResult {
    let controller = use_mut_ref({
        let config = config.clone();
        move || BrowserThemeController::with_config(LocalStorageStore, DocumentTheme, &config)
    });

    let mode = use_state({
        let controller = controller.clone();
        move || {
            let mode = controller.borrow_mut().resolve_initial();
            Logger::debug_with_component("theme", &format!("Initial theme: {}", mode));
            mode
        }
    });

    let toggle = {
        let controller = controller.clone();
        let mode = mode.clone();
        use_callback((), move |_, _| {
            let next = controller.borrow_mut().toggle();
            mode.set(next);
        })
    };

    UseThemeResult { mode: *mode, toggle }
}
