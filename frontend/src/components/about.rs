use yew::prelude::*;
use shared::content::{ABOUT_PARAGRAPHS, HIGHLIGHTS};
use super::theme_class;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub dark_mode: bool,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id="about" class={classes!("section", "about", theme_class(props.dark_mode))}>
            <div class="container">
                <h2 class="section-title">{"About Me"}</h2>
                <div class="about-grid">
                    <div class="about-text">
                        {for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> })}
                    </div>
                    <div class="highlights">
                        {for HIGHLIGHTS.iter().map(|highlight| html! {
                            <div key={highlight.title} class={classes!("highlight-card", highlight.accent)}>
                                <h3>{highlight.title}</h3>
                                <p>{highlight.description}</p>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}
