use yew::prelude::*;
use shared::content::{OWNER_NAME, PROFILE_IMAGE, SOCIAL_LINKS, TAGLINE};
use super::theme_class;
use crate::services::browser::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub dark_mode: bool,
}

fn scroll_to(section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        scroll_to_section(section);
    })
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="home" class={classes!("hero", theme_class(props.dark_mode))}>
            <div class="container hero-grid">
                <div class="hero-text">
                    <h1>
                        <span class="hero-greeting">{"Hello, I'm"}</span>
                        <span class="gradient-text">{OWNER_NAME}</span>
                    </h1>
                    <p class="hero-tagline">{TAGLINE}</p>

                    <div class="hero-actions">
                        <button class="btn btn-primary" onclick={scroll_to("projects")}>
                            {"View My Work"}
                        </button>
                        <button class="btn btn-outline" onclick={scroll_to("contact")}>
                            {"Get In Touch"}
                        </button>
                    </div>

                    <div class="social-links">
                        {for SOCIAL_LINKS.iter().map(|link| html! {
                            <a key={link.label} class="social-link" href={link.href}
                               target="_blank" rel="noopener noreferrer">
                                {link.label}
                            </a>
                        })}
                    </div>
                </div>

                <div class="hero-portrait">
                    <img src={PROFILE_IMAGE} alt={OWNER_NAME} />
                </div>
            </div>

            <button class="scroll-hint" title="About" onclick={scroll_to("about")}>{"⌄"}</button>
        </section>
    }
}
