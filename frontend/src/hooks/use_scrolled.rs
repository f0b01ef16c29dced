use gloo::events::EventListener;
use yew::prelude::*;

use crate::services::browser::scroll_offset;

/// True while the page is scrolled further down than `threshold` pixels
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| scroll_offset() > threshold);

    {
        let scrolled = scrolled.clone();
        use_effect_with(threshold.to_bits(), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    scrolled.set(scroll_offset() > threshold);
                })
            });
            move || drop(listener)
        });
    }

    *scrolled
}
