pub mod booking;
pub mod config;
pub mod content;
pub mod theme;

pub use booking::{
    available_dates, available_times, BookingController, BookingDraft, BookingError, BookingMessage, Clock, ContactDetails,
    ContactField, MessageDispatcher, Service, SubmissionState, TimeSlot,
};
pub use config::{BookingConfig, ConfigError, SiteConfig, ThemeConfig};
pub use theme::{PreferenceStore, ThemeController, ThemeEnvironment, ThemeError, ThemeMode};
