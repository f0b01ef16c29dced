use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::BookingError;

/// Services a visitor can book a session for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    WebsiteDevelopment,
    DesignConsultation,
    CodeReview,
    TechnicalConsultation,
    ProjectPlanning,
    Other,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::WebsiteDevelopment,
        Service::DesignConsultation,
        Service::CodeReview,
        Service::TechnicalConsultation,
        Service::ProjectPlanning,
        Service::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Service::WebsiteDevelopment => "Website Development",
            Service::DesignConsultation => "UI/UX Design Consultation",
            Service::CodeReview => "Code Review",
            Service::TechnicalConsultation => "Technical Consultation",
            Service::ProjectPlanning => "Project Planning",
            Service::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.label() == label)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the fixed daily appointment hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot(9),
        TimeSlot(10),
        TimeSlot(11),
        TimeSlot(14),
        TimeSlot(15),
        TimeSlot(16),
        TimeSlot(17),
    ];

    pub fn hour(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for TimeSlot {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.to_string() == s)
            .ok_or_else(|| BookingError::UnknownTimeSlot(s.to_string()))
    }
}

/// The fixed appointment hours, identical for every date
pub fn available_times() -> &'static [TimeSlot] {
    &TimeSlot::ALL
}

/// Form fields addressable by `update_field`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    /// Maps an input's `name` attribute to its field
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "phone" => Some(ContactField::Phone),
            "service" => Some(ContactField::Service),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    /// Empty means not provided
    pub phone: String,
    pub service: Option<Service>,
    /// Empty means not provided
    pub message: String,
}

impl ContactDetails {
    /// Values are stored verbatim; a service label outside the catalog clears the selection.
    pub fn set(&mut self, field: ContactField, value: &str) {
        match field {
            ContactField::Name => self.name = value.to_string(),
            ContactField::Email => self.email = value.to_string(),
            ContactField::Phone => self.phone = value.to_string(),
            ContactField::Service => self.service = Service::from_label(value),
            ContactField::Message => self.message = value.to_string(),
        }
    }

    pub fn has_required(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && self.service.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// In-progress state of the booking form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<TimeSlot>,
    pub contact: ContactDetails,
    pub submission_state: SubmissionState,
    pub confirmation_visible: bool,
}

impl BookingDraft {
    pub fn has_required_fields(&self) -> bool {
        self.selected_date.is_some() && self.selected_time.is_some() && self.contact.has_required()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission_state == SubmissionState::Submitting
    }

    pub fn is_editing(&self) -> bool {
        self.submission_state == SubmissionState::Editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_labels_round_trip() {
        for service in Service::ALL {
            assert_eq!(Service::from_label(service.label()), Some(service));
        }
        assert_eq!(Service::from_label(""), None);
        assert_eq!(Service::from_label("Plumbing"), None);
    }

    #[test]
    fn test_time_slots() {
        let labels: Vec<String> = TimeSlot::ALL.iter().map(|slot| slot.to_string()).collect();
        assert_eq!(labels, ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"]);
        assert_eq!("14:00".parse::<TimeSlot>().unwrap().hour(), 14);
        assert!("12:00".parse::<TimeSlot>().is_err());
        assert!("9:00".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_contact_field_names() {
        assert_eq!(ContactField::from_name("email"), Some(ContactField::Email));
        assert_eq!(ContactField::from_name("message"), Some(ContactField::Message));
        assert_eq!(ContactField::from_name("address"), None);
    }

    #[test]
    fn test_set_is_verbatim() {
        let mut contact = ContactDetails::default();
        contact.set(ContactField::Email, "  not-an-email ");
        assert_eq!(contact.email, "  not-an-email ");

        contact.set(ContactField::Service, "Code Review");
        assert_eq!(contact.service, Some(Service::CodeReview));
        contact.set(ContactField::Service, "");
        assert_eq!(contact.service, None);
    }

    #[test]
    fn test_default_draft_is_empty() {
        let draft = BookingDraft::default();
        assert_eq!(draft.selected_date, None);
        assert_eq!(draft.selected_time, None);
        assert_eq!(draft.contact, ContactDetails::default());
        assert_eq!(draft.submission_state, SubmissionState::Editing);
        assert!(!draft.confirmation_visible);
        assert!(!draft.has_required_fields());
    }
}
