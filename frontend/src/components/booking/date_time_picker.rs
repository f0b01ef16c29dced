use std::rc::Rc;

use chrono::NaiveDate;
use yew::prelude::*;
use shared::booking::calendar::{date_label, date_token};
use shared::TimeSlot;

#[derive(Properties, PartialEq)]
pub struct DateTimePickerProps {
    pub dates: Rc<Vec<NaiveDate>>,
    pub times: &'static [TimeSlot],
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<TimeSlot>,
    pub on_select_date: Callback<NaiveDate>,
    pub on_select_time: Callback<TimeSlot>,
}

#[function_component(DateTimePicker)]
pub fn date_time_picker(props: &DateTimePickerProps) -> Html {
    let date_buttons = props.dates.iter().map(|&date| {
        let on_select_date = props.on_select_date.clone();
        let selected = props.selected_date == Some(date);
        html! {
            <button key={date_token(date)}
                    class={classes!("slot", "date-slot", selected.then_some("selected"))}
                    onclick={Callback::from(move |_: MouseEvent| on_select_date.emit(date))}>
                {date_label(date)}
            </button>
        }
    });

    html! {
        <div class="card picker">
            <h3>{"Select Date & Time"}</h3>

            <h4>{"Available Dates"}</h4>
            <div class="slot-grid two-columns">
                {for date_buttons}
            </div>

            // Times are only offered once a date is chosen
            {if props.selected_date.is_some() {
                html! {
                    <>
                        <h4>{"Available Times"}</h4>
                        <div class="slot-grid three-columns">
                            {for props.times.iter().map(|&time| {
                                let on_select_time = props.on_select_time.clone();
                                let selected = props.selected_time == Some(time);
                                html! {
                                    <button key={time.to_string()}
                                            class={classes!("slot", "time-slot", selected.then_some("selected"))}
                                            onclick={Callback::from(move |_: MouseEvent| on_select_time.emit(time))}>
                                        {time.to_string()}
                                    </button>
                                }
                            })}
                        </div>
                    </>
                }
            } else { html! {} }}
        </div>
    }
}
