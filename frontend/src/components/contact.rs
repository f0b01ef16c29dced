use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use shared::content::CONTACT_INFO;
use super::theme_class;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub dark_mode: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

enum ContactAction {
    Name(String),
    Email(String),
    Message(String),
    Clear,
}

impl Reducible for ContactMessage {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Name(name) => next.name = name,
            ContactAction::Email(email) => next.email = email,
            ContactAction::Message(message) => next.message = message,
            ContactAction::Clear => next = ContactMessage::default(),
        }
        Rc::new(next)
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(ContactMessage::default);

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Name(input.value()));
        })
    };

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Email(input.value()));
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Message(input.value()));
        })
    };

    // Messages are not delivered anywhere; the form only records and clears itself
    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            Logger::info_with_component(
                "contact",
                &format!("Contact form submitted by {} <{}>", form.name, form.email),
            );
            form.dispatch(ContactAction::Clear);
        })
    };

    html! {
        <section id="contact" class={classes!("section", "contact", theme_class(props.dark_mode))}>
            <div class="container">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <p class="section-subtitle">
                    {"I'm always open to discussing new opportunities and interesting projects. Let's connect!"}
                </p>

                <div class="contact-grid">
                    <div class="contact-details">
                        <div class="contact-item">
                            <h3>{"Email"}</h3>
                            <p>{CONTACT_INFO.email}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Phone"}</h3>
                            <p>{CONTACT_INFO.phone}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Location"}</h3>
                            <p>{CONTACT_INFO.location}</p>
                        </div>
                        <div class="card">
                            <h3>{"Let's Work Together"}</h3>
                            <p>
                                {"I'm currently available for freelance work and full-time opportunities. \
                                  Whether you have a project in mind or just want to chat about web development, \
                                  I'd love to hear from you."}
                            </p>
                            <span class="pill">{"Remote friendly"}</span>
                        </div>
                    </div>

                    <form class="card contact-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="contact-name">{"Name"}</label>
                            <input type="text" id="contact-name" name="name" required=true
                                placeholder="Your full name"
                                value={form.name.clone()} oninput={on_name_input} />
                        </div>
                        <div class="form-group">
                            <label for="contact-email">{"Email"}</label>
                            <input type="email" id="contact-email" name="email" required=true
                                placeholder="your.email@example.com"
                                value={form.email.clone()} oninput={on_email_input} />
                        </div>
                        <div class="form-group">
                            <label for="contact-message">{"Message"}</label>
                            <textarea id="contact-message" name="message" rows="5" required=true
                                placeholder="Tell me about your project or just say hello!"
                                value={form.message.clone()} oninput={on_message_input} />
                        </div>
                        <button type="submit" class="btn btn-primary btn-block">{"Send Message"}</button>
                    </form>
                </div>
            </div>
        </section>
    }
}
