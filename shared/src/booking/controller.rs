use chrono::{NaiveDate, NaiveDateTime};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::calendar::available_dates_within;
use super::draft::{available_times, BookingDraft, ContactField, SubmissionState, TimeSlot};
use super::message::BookingMessage;
use super::BookingError;
use crate::config::BookingConfig;

/// Delivers a composed booking message (in the browser: the mailto handoff)
pub trait MessageDispatcher {
    fn send(&mut self, message: &BookingMessage) -> Result<(), BookingError>;
}

/// Local wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Drives the booking form from empty draft through submission and back.
///
/// Both asynchronous transitions are split in two: `submit` and
/// `dismiss_confirmation` return the delay the caller waits before calling
/// `complete_submission` / `complete_dismissal`. A completion call whose
/// transition is no longer current is ignored.
#[derive(Clone)]
pub struct BookingController<D, C> {
    draft: BookingDraft,
    pending: Option<BookingMessage>,
    dispatcher: D,
    clock: C,
    config: BookingConfig,
}

impl<D: MessageDispatcher, C: Clock> BookingController<D, C> {
    pub fn new(dispatcher: D, clock: C) -> Self {
        Self::with_config(dispatcher, clock, BookingConfig::default())
    }

    pub fn with_config(dispatcher: D, clock: C, config: BookingConfig) -> Self {
        Self {
            draft: BookingDraft::default(),
            pending: None,
            dispatcher,
            clock,
            config,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn available_dates(&self) -> Vec<NaiveDate> {
        available_dates_within(self.clock.today(), self.config.lookahead_days, self.config.max_dates)
    }

    pub fn available_times(&self) -> &'static [TimeSlot] {
        available_times()
    }

    /// A previously chosen time is kept when the date changes.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.draft.selected_date = Some(date);
    }

    pub fn select_time(&mut self, time: TimeSlot) {
        if self.draft.selected_date.is_none() {
            debug!(%time, "ignoring time selection without a date");
            return;
        }
        self.draft.selected_time = Some(time);
    }

    pub fn update_field(&mut self, field: ContactField, value: &str) {
        self.draft.contact.set(field, value);
    }

    pub fn can_submit(&self) -> bool {
        self.draft.has_required_fields() && !self.draft.is_submitting()
    }

    /// Start a submission. Returns the delay before `complete_submission`
    /// should run, or `None` when the draft cannot be submitted.
    pub fn submit(&mut self) -> Option<Duration> {
        if !self.can_submit() || !self.draft.is_editing() {
            debug!("submit ignored, booking incomplete or not editing");
            return None;
        }
        let message = match BookingMessage::compose(&self.draft, &self.config.recipient, self.clock.now()) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "could not compose booking message");
                return None;
            }
        };

        self.pending = Some(message);
        self.draft.submission_state = SubmissionState::Submitting;
        debug!("booking submitting");
        Some(self.config.submit_delay())
    }

    /// Hand the pending message to the dispatcher and show the confirmation.
    /// On a failed handoff the draft returns to editing untouched.
    pub fn complete_submission(&mut self) -> Result<(), BookingError> {
        if self.draft.submission_state != SubmissionState::Submitting {
            return Ok(());
        }
        let Some(message) = self.pending.take() else {
            self.draft.submission_state = SubmissionState::Editing;
            return Ok(());
        };

        if let Err(e) = self.dispatcher.send(&message) {
            warn!(error = %e, "booking handoff failed");
            self.draft.submission_state = SubmissionState::Editing;
            return Err(e);
        }

        info!(subject = %message.subject, "booking submitted");
        self.draft.confirmation_visible = true;
        self.draft.submission_state = SubmissionState::Submitted;
        Ok(())
    }

    /// Hide the confirmation. Returns the delay before `complete_dismissal`
    /// should reset the draft, or `None` if nothing was shown.
    pub fn dismiss_confirmation(&mut self) -> Option<Duration> {
        if !self.draft.confirmation_visible {
            return None;
        }
        self.draft.confirmation_visible = false;
        Some(self.config.dismiss_delay())
    }

    pub fn complete_dismissal(&mut self) {
        if self.draft.submission_state == SubmissionState::Submitted && !self.draft.confirmation_visible {
            debug!("booking draft reset");
            self.draft = BookingDraft::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::draft::{ContactDetails, Service};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Copy)]
    struct FixedClock(NaiveDateTime);

    impl FixedClock {
        // Sunday
        fn sunday() -> Self {
            Self(
                NaiveDate::from_ymd_opt(2026, 10, 18)
                    .unwrap()
                    .and_hms_opt(10, 30, 0)
                    .unwrap(),
            )
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    #[derive(Clone, Default)]
    struct RecordingDispatcher {
        sent: Rc<RefCell<Vec<BookingMessage>>>,
        fail: bool,
    }

    impl MessageDispatcher for RecordingDispatcher {
        fn send(&mut self, message: &BookingMessage) -> Result<(), BookingError> {
            if self.fail {
                return Err(BookingError::Dispatch("no mail client".to_string()));
            }
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    fn controller() -> (BookingController<RecordingDispatcher, FixedClock>, RecordingDispatcher) {
        let dispatcher = RecordingDispatcher::default();
        (BookingController::new(dispatcher.clone(), FixedClock::sunday()), dispatcher)
    }

    fn fill(controller: &mut BookingController<RecordingDispatcher, FixedClock>) {
        let first = controller.available_dates()[0];
        controller.select_date(first);
        controller.select_time("09:00".parse().unwrap());
        controller.update_field(ContactField::Name, "Alice");
        controller.update_field(ContactField::Email, "a@example.com");
        controller.update_field(ContactField::Service, "Website Development");
    }

    #[test]
    fn test_available_dates_start_after_today() {
        let (controller, _) = controller();
        let dates = controller.available_dates();
        assert_eq!(dates.len(), 14);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(controller.available_times().len(), 7);
    }

    #[derive(Clone)]
    struct SharedClock(Rc<std::cell::Cell<NaiveDateTime>>);

    impl Clock for SharedClock {
        fn now(&self) -> NaiveDateTime {
            self.0.get()
        }
    }

    #[test]
    fn test_available_dates_follow_the_clock() {
        let now = Rc::new(std::cell::Cell::new(FixedClock::sunday().0));
        let controller = BookingController::new(RecordingDispatcher::default(), SharedClock(now.clone()));
        assert_eq!(controller.available_dates()[0], NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

        // Left open past midnight into Monday
        now.set(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(0, 5, 0).unwrap());
        assert_eq!(controller.available_dates()[0], NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    }

    #[test]
    fn test_time_requires_date() {
        let (mut controller, _) = controller();
        controller.select_time(TimeSlot::ALL[2]);
        assert_eq!(controller.draft().selected_time, None);

        controller.select_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        controller.select_time(TimeSlot::ALL[2]);
        assert_eq!(controller.draft().selected_time, Some(TimeSlot::ALL[2]));
    }

    #[test]
    fn test_changing_date_keeps_time() {
        let (mut controller, _) = controller();
        controller.select_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        controller.select_time(TimeSlot::ALL[4]);
        controller.select_date(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
        assert_eq!(controller.draft().selected_time, Some(TimeSlot::ALL[4]));
    }

    #[test]
    fn test_can_submit_requires_every_field() {
        let (mut complete, _) = controller();
        fill(&mut complete);
        assert!(complete.can_submit());

        let removals: [fn(&mut BookingDraft); 5] = [
            |d| d.selected_date = None,
            |d| d.selected_time = None,
            |d| d.contact.name.clear(),
            |d| d.contact.email.clear(),
            |d| d.contact.service = None,
        ];
        // Every non-empty combination of missing fields
        for mask in 1u8..(1 << removals.len()) {
            let mut missing = complete.clone();
            for (bit, remove) in removals.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    remove(&mut missing.draft);
                }
            }
            assert!(!missing.can_submit(), "mask {mask:05b}");
            assert_eq!(missing.submit(), None);
            assert_eq!(missing.draft().submission_state, SubmissionState::Editing);
        }
    }

    #[test]
    fn test_submit_from_submitted_is_rejected() {
        let (mut controller, dispatcher) = controller();
        fill(&mut controller);
        controller.submit();
        controller.complete_submission().unwrap();
        assert_eq!(controller.draft().submission_state, SubmissionState::Submitted);

        assert_eq!(controller.submit(), None);
        assert_eq!(controller.draft().submission_state, SubmissionState::Submitted);
        assert!(controller.draft().confirmation_visible);
        controller.complete_submission().unwrap();
        assert_eq!(dispatcher.sent.borrow().len(), 1);
    }

    #[test]
    fn test_optional_fields_do_not_gate_submit() {
        let (mut controller, _) = controller();
        fill(&mut controller);
        controller.update_field(ContactField::Phone, "");
        controller.update_field(ContactField::Message, "");
        assert!(controller.can_submit());
    }

    #[test]
    fn test_update_field_is_idempotent() {
        let (mut once, _) = controller();
        let (mut twice, _) = controller();
        once.update_field(ContactField::Phone, "+250 791 593 529");
        twice.update_field(ContactField::Phone, "+250 791 593 529");
        twice.update_field(ContactField::Phone, "+250 791 593 529");
        assert_eq!(once.draft(), twice.draft());
    }

    #[test]
    fn test_submit_hands_off_mailto_and_shows_confirmation() {
        let (mut controller, dispatcher) = controller();
        fill(&mut controller);

        assert_eq!(controller.submit(), Some(Duration::from_millis(1500)));
        assert_eq!(controller.draft().submission_state, SubmissionState::Submitting);
        assert!(!controller.can_submit());
        assert_eq!(controller.submit(), None);
        assert!(dispatcher.sent.borrow().is_empty());

        controller.complete_submission().unwrap();

        let sent = dispatcher.sent.borrow();
        assert_eq!(sent.len(), 1);
        let message = &sent[0];
        assert_eq!(message.recipient, "umuhiregermaine12@gmail.com");
        assert!(message.subject.contains("Website Development"));
        assert!(message.body.contains("Alice"));
        assert!(message.body.contains("09:00"));
        assert!(message.body.contains("Monday, October 19, 2026"));
        assert!(message.body.contains("Booking submitted on: 10/18/2026, 10:30:00 AM"));

        let uri = message.mailto_uri();
        assert!(uri.starts_with("mailto:umuhiregermaine12@gmail.com?subject="));
        assert!(uri.contains("Website%20Development"));

        assert!(controller.draft().confirmation_visible);
        assert_eq!(controller.draft().submission_state, SubmissionState::Submitted);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let (mut controller, dispatcher) = controller();
        fill(&mut controller);
        controller.complete_submission().unwrap();
        assert!(dispatcher.sent.borrow().is_empty());
        assert_eq!(controller.draft().submission_state, SubmissionState::Editing);

        controller.submit();
        controller.complete_submission().unwrap();
        controller.complete_submission().unwrap();
        assert_eq!(dispatcher.sent.borrow().len(), 1);
    }

    #[test]
    fn test_failed_handoff_returns_to_editing() {
        let dispatcher = RecordingDispatcher {
            fail: true,
            ..RecordingDispatcher::default()
        };
        let mut controller = BookingController::new(dispatcher, FixedClock::sunday());
        fill(&mut controller);
        controller.submit();

        let err = controller.complete_submission().unwrap_err();
        assert_eq!(err, BookingError::Dispatch("no mail client".to_string()));
        assert_eq!(controller.draft().submission_state, SubmissionState::Editing);
        assert!(!controller.draft().confirmation_visible);
        assert_eq!(controller.draft().contact.name, "Alice");
        assert!(controller.can_submit());
    }

    #[test]
    fn test_dismiss_resets_after_delay() {
        let (mut controller, _) = controller();
        fill(&mut controller);
        controller.submit();
        controller.complete_submission().unwrap();

        assert_eq!(controller.dismiss_confirmation(), Some(Duration::from_millis(500)));
        assert!(!controller.draft().confirmation_visible);
        // Data stays visible while the popup animates out
        assert_eq!(controller.draft().contact.name, "Alice");
        assert_eq!(controller.draft().submission_state, SubmissionState::Submitted);

        controller.complete_dismissal();
        let draft = controller.draft();
        assert_eq!(draft.selected_date, None);
        assert_eq!(draft.selected_time, None);
        assert_eq!(draft.contact, ContactDetails::default());
        assert_eq!(draft.submission_state, SubmissionState::Editing);
        assert_eq!(draft, &BookingDraft::default());
    }

    #[test]
    fn test_dismiss_without_confirmation_is_noop() {
        let (mut controller, _) = controller();
        fill(&mut controller);
        assert_eq!(controller.dismiss_confirmation(), None);
        controller.complete_dismissal();
        assert_eq!(controller.draft().contact.service, Some(Service::WebsiteDevelopment));
    }

    #[test]
    fn test_custom_config() {
        let config = BookingConfig {
            recipient: "bookings@example.com".to_string(),
            submit_delay_ms: 10,
            max_dates: 3,
            ..BookingConfig::default()
        };
        let dispatcher = RecordingDispatcher::default();
        let mut controller = BookingController::with_config(dispatcher.clone(), FixedClock::sunday(), config);
        assert_eq!(controller.available_dates().len(), 3);

        fill(&mut controller);
        assert_eq!(controller.submit(), Some(Duration::from_millis(10)));
        controller.complete_submission().unwrap();
        assert_eq!(dispatcher.sent.borrow()[0].recipient, "bookings@example.com");
    }
}
