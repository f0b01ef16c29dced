use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::calendar::long_date;
use super::draft::BookingDraft;
use super::BookingError;

/// Plain-text booking request handed off to the visitor's mail client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl BookingMessage {
    /// Build the request from a draft that holds a date, time and service.
    pub fn compose(draft: &BookingDraft, recipient: &str, submitted_at: NaiveDateTime) -> Result<Self, BookingError> {
        let (Some(date), Some(time), Some(service)) =
            (draft.selected_date, draft.selected_time, draft.contact.service)
        else {
            return Err(BookingError::IncompleteDraft);
        };
        let contact = &draft.contact;

        let phone = if contact.phone.is_empty() {
            "Not provided"
        } else {
            contact.phone.as_str()
        };
        let details = if contact.message.is_empty() {
            "No additional details provided"
        } else {
            contact.message.as_str()
        };

        let body = format!(
            "New Booking Request Details:\n\
             \n\
             Client Information:\n\
             - Name: {name}\n\
             - Email: {email}\n\
             - Phone: {phone}\n\
             \n\
             Appointment Details:\n\
             - Date: {date}\n\
             - Time: {time}\n\
             - Service: {service}\n\
             \n\
             Project Details:\n\
             {details}\n\
             \n\
             ---\n\
             Booking submitted on: {submitted}",
            name = contact.name,
            email = contact.email,
            date = long_date(date),
            submitted = submitted_at.format("%-m/%-d/%Y, %-I:%M:%S %p"),
        );

        Ok(Self {
            recipient: recipient.to_string(),
            subject: format!("New Booking Request: {}", service),
            body,
        })
    }

    /// `mailto:` URI with percent-encoded subject and body
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::draft::{ContactField, Service, TimeSlot};
    use chrono::NaiveDate;

    fn submitted_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(14, 3, 9)
            .unwrap()
    }

    fn complete_draft() -> BookingDraft {
        let mut draft = BookingDraft {
            selected_date: NaiveDate::from_ymd_opt(2026, 1, 6),
            selected_time: Some(TimeSlot::ALL[0]),
            ..BookingDraft::default()
        };
        draft.contact.set(ContactField::Name, "Alice");
        draft.contact.set(ContactField::Email, "a@example.com");
        draft.contact.set(ContactField::Service, "Website Development");
        draft
    }

    #[test]
    fn test_compose_fills_template() {
        let message = BookingMessage::compose(&complete_draft(), "owner@example.com", submitted_at()).unwrap();

        assert_eq!(message.recipient, "owner@example.com");
        assert_eq!(message.subject, "New Booking Request: Website Development");
        assert!(message.body.starts_with("New Booking Request Details:\n\nClient Information:\n- Name: Alice\n"));
        assert!(message.body.contains("- Email: a@example.com\n"));
        assert!(message.body.contains("- Phone: Not provided\n"));
        assert!(message.body.contains("- Date: Tuesday, January 6, 2026\n"));
        assert!(message.body.contains("- Time: 09:00\n"));
        assert!(message.body.contains("- Service: Website Development\n"));
        assert!(message.body.contains("Project Details:\nNo additional details provided\n"));
        assert!(message.body.ends_with("---\nBooking submitted on: 1/5/2026, 2:03:09 PM"));
    }

    #[test]
    fn test_compose_uses_optional_fields_when_present() {
        let mut draft = complete_draft();
        draft.contact.set(ContactField::Phone, "+250 791 000 000");
        draft.contact.set(ContactField::Message, "A landing page");

        let message = BookingMessage::compose(&draft, "owner@example.com", submitted_at()).unwrap();
        assert!(message.body.contains("- Phone: +250 791 000 000\n"));
        assert!(message.body.contains("Project Details:\nA landing page\n"));
    }

    #[test]
    fn test_compose_requires_date_time_and_service() {
        let mut draft = complete_draft();
        draft.contact.service = None;
        assert_eq!(
            BookingMessage::compose(&draft, "owner@example.com", submitted_at()),
            Err(BookingError::IncompleteDraft)
        );
        assert_eq!(Service::from_label("Other"), Some(Service::Other));
    }

    #[test]
    fn test_mailto_uri_encodes_subject_and_body() {
        let message = BookingMessage {
            recipient: "owner@example.com".to_string(),
            subject: "New Booking Request: UI/UX Design Consultation".to_string(),
            body: "Line one\nName: A & B".to_string(),
        };
        assert_eq!(
            message.mailto_uri(),
            "mailto:owner@example.com?subject=New%20Booking%20Request%3A%20UI%2FUX%20Design%20Consultation\
             &body=Line%20one%0AName%3A%20A%20%26%20B"
        );
    }
}
