use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;
use gloo::timers::future::TimeoutFuture;
use shared::{BookingConfig, BookingController, BookingDraft, Clock, ContactField, TimeSlot};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::browser::MailtoDispatcher;
use crate::services::date_utils::BrowserClock;
use crate::services::logging::Logger;

pub type BrowserBookingController = BookingController<MailtoDispatcher, BrowserClock>;

pub enum BookingAction {
    SelectDate(NaiveDate),
    SelectTime(TimeSlot),
    UpdateField(ContactField, String),
    Submit,
    CompleteSubmission,
    DismissConfirmation,
    CompleteDismissal,
}

pub struct BookingState {
    controller: BrowserBookingController,
}

impl Reducible for BookingState {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();

        match action {
            BookingAction::SelectDate(date) => controller.select_date(date),
            BookingAction::SelectTime(time) => controller.select_time(time),
            BookingAction::UpdateField(field, value) => controller.update_field(field, &value),
            BookingAction::Submit => {
                if controller.submit().is_some() {
                    Logger::info_with_component("booking", "Booking submitting");
                }
            }
            BookingAction::CompleteSubmission => {
                if let Err(e) = controller.complete_submission() {
                    Logger::error_with_component("booking", &format!("Booking handoff failed: {}", e));
                }
            }
            BookingAction::DismissConfirmation => {
                controller.dismiss_confirmation();
            }
            BookingAction::CompleteDismissal => controller.complete_dismissal(),
        }

        Rc::new(Self { controller })
    }
}

pub struct UseBookingResult {
    pub draft: BookingDraft,
    pub available_dates: Rc<Vec<NaiveDate>>,
    pub available_times: &'static [TimeSlot],
    pub can_submit: bool,
    pub actions: UseBookingActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBookingActions {
    pub select_date: Callback<NaiveDate>,
    pub select_time: Callback<TimeSlot>,
    pub update_field: Callback<(ContactField, String)>,
    pub submit: Callback<()>,
    pub dismiss_confirmation: Callback<()>,
}

fn after(delay: Duration, state: UseReducerHandle<BookingState>, action: BookingAction) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    spawn_local(async move {
        TimeoutFuture::new(millis).await;
        state.dispatch(action);
    });
}

/// Hook for the booking form. Timers for the two delayed transitions run
/// here; the controller decides whether a completion still applies.
#[hook]
pub fn use_booking(config: &BookingConfig) -> UseBookingResult {
    let state = use_reducer({
        let config = config.clone();
        move || BookingState {
            controller: BrowserBookingController::with_config(MailtoDispatcher, BrowserClock, config),
        }
    });

    // Recomputed when the local day changes
    let available_dates = {
        let state = state.clone();
        use_memo(BrowserClock.today(), move |_| state.controller.available_dates())
    };

    let select_date = {
        let state = state.clone();
        Callback::from(move |date: NaiveDate| state.dispatch(BookingAction::SelectDate(date)))
    };

    let select_time = {
        let state = state.clone();
        Callback::from(move |time: TimeSlot| state.dispatch(BookingAction::SelectTime(time)))
    };

    let update_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            state.dispatch(BookingAction::UpdateField(field, value))
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            if !state.controller.can_submit() || !state.controller.draft().is_editing() {
                return;
            }
            let delay = state.controller.config().submit_delay();
            state.dispatch(BookingAction::Submit);
            after(delay, state.clone(), BookingAction::CompleteSubmission);
        })
    };

    let dismiss_confirmation = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            if !state.controller.draft().confirmation_visible {
                return;
            }
            let delay = state.controller.config().dismiss_delay();
            state.dispatch(BookingAction::DismissConfirmation);
            after(delay, state.clone(), BookingAction::CompleteDismissal);
        })
    };

    UseBookingResult {
        draft: state.controller.draft().clone(),
        available_dates,
        available_times: state.controller.available_times(),
        can_submit: state.controller.can_submit(),
        actions: UseBookingActions {
            select_date,
            select_time,
            update_field,
            submit,
            dismiss_confirmation,
        },
    }
}
