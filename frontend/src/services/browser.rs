use anyhow::{anyhow, Context, Result};
use shared::{BookingError, BookingMessage, MessageDispatcher, PreferenceStore, ThemeEnvironment, ThemeError, ThemeMode};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Storage, Window};

use crate::services::logging::Logger;

const DARK_CLASS: &str = "dark";
const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global window"))
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

fn local_storage() -> Result<Storage> {
    window()?
        .local_storage()
        .map_err(js_error)?
        .context("local storage is disabled")
}

/// `PreferenceStore` over `window.localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        local_storage()
            .and_then(|storage| storage.get_item(key).map_err(js_error))
            .map_err(|e| ThemeError::StoreUnavailable(e.to_string()))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        local_storage()
            .and_then(|storage| storage.set_item(key, value).map_err(js_error))
            .map_err(|e| ThemeError::WriteFailed(e.to_string()))
    }
}

/// `ThemeEnvironment` that toggles the `dark` class on `<html>`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DocumentTheme;

impl DocumentTheme {
    fn set_root_class(dark: bool) -> Result<()> {
        let root = window()?
            .document()
            .context("no document")?
            .document_element()
            .context("no root element")?;
        let classes = root.class_list();
        if dark {
            classes.add_1(DARK_CLASS).map_err(js_error)
        } else {
            classes.remove_1(DARK_CLASS).map_err(js_error)
        }
    }
}

impl ThemeEnvironment for DocumentTheme {
    fn prefers_dark(&self) -> bool {
        window()
            .ok()
            .and_then(|w| w.match_media(DARK_MEDIA_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }

    fn apply(&mut self, mode: ThemeMode) {
        if let Err(e) = Self::set_root_class(mode.is_dark()) {
            Logger::warn_with_component("theme", &format!("Failed to apply theme: {}", e));
        }
    }
}

/// Hands booking messages to the visitor's mail client by navigating to a `mailto:` URI
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MailtoDispatcher;

impl MessageDispatcher for MailtoDispatcher {
    fn send(&mut self, message: &BookingMessage) -> Result<(), BookingError> {
        window()
            .and_then(|w| w.location().set_href(&message.mailto_uri()).map_err(js_error))
            .map_err(|e| BookingError::Dispatch(e.to_string()))
    }
}

/// Smooth-scroll to the element with the given id. Returns false if it does not exist.
pub fn scroll_to_section(section_id: &str) -> bool {
    let element = window()
        .ok()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(section_id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            Logger::debug_with_component("navigation", &format!("No section with id {}", section_id));
            false
        }
    }
}

/// Vertical scroll offset of the page in pixels
pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().map_err(js_error)).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ThemeController;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root_has_dark_class() -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map_or(false, |root| root.class_list().contains(DARK_CLASS))
    }

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let mut store = LocalStorageStore;
        store.save("portfolio-test-key", "dark").unwrap();
        assert_eq!(store.load("portfolio-test-key").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.load("portfolio-missing-key").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_toggle_updates_document_and_storage() {
        let mut store = LocalStorageStore;
        store.save("theme", "light").unwrap();

        let mut controller = ThemeController::new(LocalStorageStore, DocumentTheme);
        assert_eq!(controller.resolve_initial(), ThemeMode::Light);
        assert!(!root_has_dark_class());

        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert!(root_has_dark_class());
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));

        controller.toggle();
        assert!(!root_has_dark_class());
    }

    #[wasm_bindgen_test]
    fn test_missing_section_is_reported() {
        assert!(!scroll_to_section("no-such-section"));
    }
}
