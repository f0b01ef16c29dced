mod booking_form;
mod confirmation_popup;
mod date_time_picker;

use yew::prelude::*;
use shared::booking::calendar::long_date;
use shared::{BookingConfig, SubmissionState};
use super::theme_class;
use crate::hooks::use_booking::use_booking;
use booking_form::BookingForm;
use confirmation_popup::ConfirmationPopup;
use date_time_picker::DateTimePicker;

#[derive(Properties, PartialEq)]
pub struct BookingProps {
    pub dark_mode: bool,
    pub config: BookingConfig,
}

#[function_component(Booking)]
pub fn booking(props: &BookingProps) -> Html {
    let booking = use_booking(&props.config);
    let draft = &booking.draft;
    let actions = &booking.actions;

    let section_class = classes!("section", "booking", theme_class(props.dark_mode));

    // After the popup closes the section shows a summary until the draft resets
    if draft.submission_state == SubmissionState::Submitted && !draft.confirmation_visible {
        let when = match (draft.selected_date, draft.selected_time) {
            (Some(date), Some(time)) => format!("{} at {}", long_date(date), time),
            _ => String::new(),
        };
        return html! {
            <section id="booking" class={section_class}>
                <div class="container narrow">
                    <div class="card booking-done">
                        <div class="success-icon">{"✓"}</div>
                        <h2>{"Booking Submitted!"}</h2>
                        <p>{"Your booking request has been sent. We'll confirm your appointment shortly."}</p>
                        <div class="pill">{when}</div>
                    </div>
                </div>
            </section>
        };
    }

    html! {
        <>
            <section id="booking" class={section_class}>
                <div class="container">
                    <h2 class="section-title">{"Book an Appointment"}</h2>
                    <p class="section-subtitle">
                        {"Ready to discuss your project? Schedule a free consultation to explore how we can work together."}
                    </p>

                    <div class="booking-grid">
                        <DateTimePicker
                            dates={booking.available_dates.clone()}
                            times={booking.available_times}
                            selected_date={draft.selected_date}
                            selected_time={draft.selected_time}
                            on_select_date={actions.select_date.clone()}
                            on_select_time={actions.select_time.clone()}
                        />
                        <BookingForm
                            contact={draft.contact.clone()}
                            can_submit={booking.can_submit}
                            submitting={draft.is_submitting()}
                            on_field_change={actions.update_field.clone()}
                            on_submit={actions.submit.clone()}
                        />
                    </div>

                    <div class="booking-info">
                        <span>{"30-60 min sessions"}</span>
                        <span>{"Free consultation"}</span>
                        <span>{"Remote friendly"}</span>
                    </div>
                </div>
            </section>

            <ConfirmationPopup
                dark_mode={props.dark_mode}
                visible={draft.confirmation_visible}
                date={draft.selected_date}
                time={draft.selected_time}
                on_close={actions.dismiss_confirmation.clone()}
            />
        </>
    }
}
