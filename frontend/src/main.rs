mod components;
mod hooks;
mod services;

use yew::prelude::*;
use shared::SiteConfig;
use components::about::About;
use components::booking::Booking;
use components::contact::Contact;
use components::footer::Footer;
use components::header::Header;
use components::hero::Hero;
use components::projects::Projects;
use components::skills::Skills;
use hooks::use_theme::use_theme;
use services::logging::Logger;

const SITE_CONFIG: &str = include_str!("../site.json");

fn load_site_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("Using default site configuration: {}", e));
            SiteConfig::default()
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_site_config());
    let theme = use_theme(&config.theme);
    let dark_mode = theme.mode.is_dark();

    html! {
        <div class={classes!("app", components::theme_class(dark_mode))}>
            <Header {dark_mode} on_toggle_theme={theme.toggle.clone()} />
            <Hero {dark_mode} />
            <About {dark_mode} />
            <Skills {dark_mode} />
            <Projects {dark_mode} />
            <Booking {dark_mode} config={config.booking.clone()} />
            <Contact {dark_mode} />
            <Footer {dark_mode} />
        </div>
    }
}

fn main() {
    services::logging::init();
    yew::Renderer::<App>::new().render();
}
