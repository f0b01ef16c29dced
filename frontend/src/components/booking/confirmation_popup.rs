use chrono::NaiveDate;
use yew::prelude::*;
use shared::booking::calendar::long_date_without_year;
use shared::TimeSlot;
use crate::components::theme_class;

#[derive(Properties, PartialEq)]
pub struct ConfirmationPopupProps {
    pub dark_mode: bool,
    pub visible: bool,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub on_close: Callback<()>,
}

/// Always mounted so the close transition can play; `visible` drives the CSS state.
#[function_component(ConfirmationPopup)]
pub fn confirmation_popup(props: &ConfirmationPopupProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    html! {
        <div class={classes!("popup", theme_class(props.dark_mode), props.visible.then_some("visible"))}>
            <div class="popup-overlay" onclick={close.clone()}></div>
            <div class="popup-content">
                <button class="popup-close" title="Close" onclick={close.clone()}>{"✕"}</button>
                <div class="success-icon">{"✓"}</div>
                <h3>{"Thank You for Working with Us!"}</h3>
                <p>
                    {"Your booking request has been submitted successfully. \
                      We'll get back to you shortly to confirm your appointment."}
                </p>
                <div class="popup-details">
                    <div>{props.date.map(long_date_without_year).unwrap_or_default()}</div>
                    <div>{props.time.map(|time| time.to_string()).unwrap_or_default()}</div>
                </div>
                <button class="btn btn-primary btn-block" onclick={close}>{"Close"}</button>
            </div>
        </div>
    }
}
