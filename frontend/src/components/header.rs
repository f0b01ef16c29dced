use yew::prelude::*;
use shared::content::{section_label, BRAND, NAV_SECTIONS};
use super::theme_class;
use crate::hooks::use_scrolled::use_scrolled;
use crate::services::browser::scroll_to_section;

const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_open = use_state(|| false);
    let scrolled = use_scrolled(SCROLLED_THRESHOLD_PX);

    let toggle_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(!*is_open);
        })
    };

    let on_theme_click = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let nav_button = |section: &'static str, class: &'static str| {
        let is_open = is_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if scroll_to_section(section) {
                is_open.set(false);
            }
        });
        html! {
            <button key={section} class={class} {onclick}>{section_label(section)}</button>
        }
    };

    let theme_icon = if props.dark_mode { "☀" } else { "☾" };

    html! {
        <header class={classes!("site-header", theme_class(props.dark_mode), scrolled.then_some("scrolled"))}>
            <div class="container header-row">
                <div class="brand">{BRAND}</div>

                <nav class="desktop-nav">
                    {for NAV_SECTIONS.into_iter().map(|section| nav_button(section, "nav-link"))}
                    <button class="theme-toggle" title="Toggle theme" onclick={on_theme_click.clone()}>
                        {theme_icon}
                    </button>
                </nav>

                <div class="mobile-controls">
                    <button class="theme-toggle" title="Toggle theme" onclick={on_theme_click}>
                        {theme_icon}
                    </button>
                    <button class="menu-toggle" onclick={toggle_menu}>
                        {if *is_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            {if *is_open {
                html! {
                    <div class="container mobile-menu">
                        {for NAV_SECTIONS.into_iter().map(|section| nav_button(section, "mobile-nav-link"))}
                    </div>
                }
            } else { html! {} }}
        </header>
    }
}
