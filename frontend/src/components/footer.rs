use yew::prelude::*;
use shared::content::{CONTACT_INFO, FOOTER_LINKS, OWNER_NAME, SOCIAL_LINKS};
use super::theme_class;
use crate::services::browser::scroll_to_section;
use crate::services::date_utils::current_year;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub dark_mode: bool,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class={classes!("site-footer", theme_class(props.dark_mode))}>
            <div class="container footer-grid">
                <div>
                    <div class="brand">{OWNER_NAME}</div>
                    <p>{"Front-End Developer passionate about creating beautiful, functional web experiences."}</p>
                    <div class="social-links">
                        {for SOCIAL_LINKS.iter().map(|link| html! {
                            <a key={link.label} class="social-link" href={link.href}
                               target="_blank" rel="noopener noreferrer">
                                {link.label}
                            </a>
                        })}
                    </div>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul class="footer-links">
                        {for FOOTER_LINKS.iter().map(|link| {
                            let target = link.to_lowercase();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                scroll_to_section(&target);
                            });
                            html! {
                                <li key={*link}><button class="link-button" {onclick}>{*link}</button></li>
                            }
                        })}
                    </ul>
                </div>

                <div>
                    <h3>{"Get In Touch"}</h3>
                    <p>{"Always interested in new opportunities and collaborations."}</p>
                    <p>{format!("Email: {}", CONTACT_INFO.email)}</p>
                </div>
            </div>

            <div class="container copyright">
                {format!("© {} Germaine UMUHIRE. All rights reserved.", current_year())}
            </div>
        </footer>
    }
}
