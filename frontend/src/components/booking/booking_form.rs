use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use shared::{ContactDetails, ContactField, Service};

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub contact: ContactDetails,
    pub can_submit: bool,
    pub submitting: bool,
    pub on_field_change: Callback<(ContactField, String)>,
    pub on_submit: Callback<()>,
}

fn on_input(field: ContactField, on_field_change: &Callback<(ContactField, String)>) -> Callback<InputEvent> {
    let on_field_change = on_field_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_field_change.emit((field, input.value()));
    })
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let contact = &props.contact;

    let on_service_change = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit((ContactField::Service, select.value()));
        })
    };

    let on_message_input = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_field_change.emit((ContactField::Message, input.value()));
        })
    };

    let on_submit_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    let selected_service = contact.service.map(|service| service.label()).unwrap_or_default();

    html! {
        <div class="card booking-form">
            <h3>{"Your Information"}</h3>

            <div class="form-group">
                <label for="booking-name">{"Full Name *"}</label>
                <input type="text" id="booking-name" name="name" required=true
                    placeholder="Enter your full name"
                    value={contact.name.clone()}
                    oninput={on_input(ContactField::Name, &props.on_field_change)} />
            </div>

            <div class="form-group">
                <label for="booking-email">{"Email Address *"}</label>
                <input type="email" id="booking-email" name="email" required=true
                    placeholder="your.email@example.com"
                    value={contact.email.clone()}
                    oninput={on_input(ContactField::Email, &props.on_field_change)} />
            </div>

            <div class="form-group">
                <label for="booking-phone">{"Phone Number"}</label>
                <input type="tel" id="booking-phone" name="phone"
                    placeholder="+250 xxx xxx xxx"
                    value={contact.phone.clone()}
                    oninput={on_input(ContactField::Phone, &props.on_field_change)} />
            </div>

            <div class="form-group">
                <label for="booking-service">{"Service Needed *"}</label>
                <select id="booking-service" name="service" required=true onchange={on_service_change}>
                    <option value="" selected={contact.service.is_none()}>{"Select a service"}</option>
                    {for Service::ALL.iter().map(|service| html! {
                        <option key={service.label()} value={service.label()}
                                selected={service.label() == selected_service}>
                            {service.label()}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="booking-message">{"Project Details"}</label>
                <textarea id="booking-message" name="message" rows="4"
                    placeholder="Tell me about your project, goals, and any specific requirements..."
                    value={contact.message.clone()}
                    oninput={on_message_input} />
            </div>

            <button type="button" class="btn btn-primary btn-block"
                    disabled={!props.can_submit}
                    onclick={on_submit_click}>
                {if props.submitting {
                    html! { <><span class="spinner"></span><span>{"Submitting..."}</span></> }
                } else {
                    html! { <span>{"Book Appointment"}</span> }
                }}
            </button>
        </div>
    }
}
