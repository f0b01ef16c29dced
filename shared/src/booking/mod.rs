pub mod calendar;
pub mod controller;
pub mod draft;
pub mod message;

use thiserror::Error;

pub use calendar::{available_dates, available_dates_within, date_label, long_date};
pub use controller::{BookingController, Clock, MessageDispatcher};
pub use draft::{available_times, BookingDraft, ContactDetails, ContactField, Service, SubmissionState, TimeSlot};
pub use message::BookingMessage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("booking is missing a date, time or service")]
    IncompleteDraft,
    #[error("unknown time slot {0:?}")]
    UnknownTimeSlot(String),
    #[error("failed to hand off booking message: {0}")]
    Dispatch(String),
}
