//! Field-level validation for contact drafts.
//!
//! Rules are evaluated independently per field; the first failing rule for
//! a field wins and each field reports at most one message. A draft that
//! passes every rule is normalized into a typed [`ContactValues`], so the
//! rest of the crate never re-checks these constraints.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use url::Url;

use crate::form::ContactDraft;
use crate::model::{ContactValues, Relationship};

pub const NOTES_MAX_LEN: usize = 500;

const DATE_FORMAT: &str = "%Y-%m-%d";

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());
static ZIP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5,6}$").unwrap());

/// A contact field, named as the CLI exposes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    City,
    State,
    ZipCode,
    Country,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Whatsapp,
    Birthday,
    Relationship,
    Notes,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::City => "city",
            ContactField::State => "state",
            ContactField::ZipCode => "zip-code",
            ContactField::Country => "country",
            ContactField::Facebook => "facebook",
            ContactField::Twitter => "twitter",
            ContactField::Instagram => "instagram",
            ContactField::Linkedin => "linkedin",
            ContactField::Whatsapp => "whatsapp",
            ContactField::Birthday => "birthday",
            ContactField::Relationship => "relationship",
            ContactField::Notes => "notes",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field error messages, in field order. At most one entry per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(ContactField, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: ContactField, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Validation failed: {}", joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a draft and normalize it into typed values.
pub fn validate(draft: &ContactDraft) -> Result<ContactValues, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if draft.name.is_empty() {
        errors.push(ContactField::Name, "Required");
    } else if !NAME_REGEX.is_match(&draft.name) {
        errors.push(
            ContactField::Name,
            "Name can only contain letters and spaces",
        );
    }

    if draft.email.is_empty() {
        errors.push(ContactField::Email, "Required");
    } else if !EMAIL_REGEX.is_match(&draft.email) {
        errors.push(ContactField::Email, "Invalid email format");
    }

    if draft.phone.is_empty() {
        errors.push(ContactField::Phone, "Phone number is required");
    } else if !PHONE_REGEX.is_match(&draft.phone) {
        errors.push(
            ContactField::Phone,
            "Phone number must be 10 digits and start with 6-9",
        );
    }

    if draft.city.is_empty() {
        errors.push(ContactField::City, "City is required");
    }

    if draft.state.is_empty() {
        errors.push(ContactField::State, "State is required");
    }

    if draft.zip_code.is_empty() {
        errors.push(ContactField::ZipCode, "Zip code is required");
    } else if !ZIP_REGEX.is_match(&draft.zip_code) {
        errors.push(ContactField::ZipCode, "Zip code must be 5-6 digits");
    }

    if draft.country.is_empty() {
        errors.push(ContactField::Country, "Country is required");
    }

    let links = [
        (ContactField::Facebook, &draft.facebook),
        (ContactField::Twitter, &draft.twitter),
        (ContactField::Instagram, &draft.instagram),
        (ContactField::Linkedin, &draft.linkedin),
        (ContactField::Whatsapp, &draft.whatsapp),
    ];
    for (field, value) in links {
        if !value.is_empty() && Url::parse(value).is_err() {
            errors.push(field, "Must be a valid URL");
        }
    }

    let birthday = if draft.birthday.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(&draft.birthday, DATE_FORMAT) {
            Ok(date) if date > Local::now().date_naive() => {
                errors.push(ContactField::Birthday, "Birthday cannot be in the future");
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(
                    ContactField::Birthday,
                    "Birthday must be a valid date (YYYY-MM-DD)",
                );
                None
            }
        }
    };

    let relationship = if draft.relationship.is_empty() {
        errors.push(ContactField::Relationship, "Relationship is required");
        None
    } else {
        match draft.relationship.parse::<Relationship>() {
            Ok(relationship) => Some(relationship),
            Err(message) => {
                errors.push(ContactField::Relationship, message);
                None
            }
        }
    };

    if draft.notes.chars().count() > NOTES_MAX_LEN {
        errors.push(ContactField::Notes, "Notes cannot exceed 500 characters");
    }

    match relationship {
        Some(relationship) if errors.is_empty() => Ok(ContactValues {
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            city: draft.city.clone(),
            state: draft.state.clone(),
            zip_code: draft.zip_code.clone(),
            country: draft.country.clone(),
            facebook: draft.facebook.clone(),
            twitter: draft.twitter.clone(),
            instagram: draft.instagram.clone(),
            linkedin: draft.linkedin.clone(),
            whatsapp: draft.whatsapp.clone(),
            birthday,
            relationship,
            notes: draft.notes.clone(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Ravi Kumar".into(),
            email: "ravi@gmail.com".into(),
            phone: "9876543210".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            zip_code: "411001".into(),
            country: "India".into(),
            relationship: "friend".into(),
            ..ContactDraft::default()
        }
    }

    #[test]
    fn accepts_a_fully_valid_draft() {
        let values = validate(&valid_draft()).unwrap();
        assert_eq!(values.name, "Ravi Kumar");
        assert_eq!(values.relationship, Relationship::Friend);
        assert_eq!(values.birthday, None);
    }

    #[test]
    fn rejects_empty_required_fields_with_field_specific_messages() {
        let errors = validate(&ContactDraft::default()).unwrap_err();
        assert_eq!(errors.get(ContactField::Name), Some("Required"));
        assert_eq!(errors.get(ContactField::Email), Some("Required"));
        assert_eq!(
            errors.get(ContactField::Phone),
            Some("Phone number is required")
        );
        assert_eq!(errors.get(ContactField::City), Some("City is required"));
        assert_eq!(errors.get(ContactField::State), Some("State is required"));
        assert_eq!(
            errors.get(ContactField::ZipCode),
            Some("Zip code is required")
        );
        assert_eq!(
            errors.get(ContactField::Country),
            Some("Country is required")
        );
        assert_eq!(
            errors.get(ContactField::Relationship),
            Some("Relationship is required")
        );
    }

    #[test]
    fn first_failing_rule_per_field_wins() {
        let mut draft = valid_draft();
        draft.name = String::new();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(ContactField::Name), Some("Required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn rejects_name_with_digits() {
        let mut draft = valid_draft();
        draft.name = "Ravi2 Kumar".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Name),
            Some("Name can only contain letters and spaces")
        );
    }

    #[test]
    fn rejects_malformed_email() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(ContactField::Email), Some("Invalid email format"));
    }

    #[test]
    fn phone_must_be_ten_digits_starting_six_to_nine() {
        for bad in ["123456789", "12345678901", "5876543210", "987654321", "98765x3210"] {
            let mut draft = valid_draft();
            draft.phone = bad.into();
            let errors = validate(&draft).unwrap_err();
            assert_eq!(
                errors.get(ContactField::Phone),
                Some("Phone number must be 10 digits and start with 6-9"),
                "expected rejection for {:?}",
                bad
            );
        }
        for good in ["6000000000", "9876543210"] {
            let mut draft = valid_draft();
            draft.phone = good.into();
            assert!(validate(&draft).is_ok(), "expected {:?} to pass", good);
        }
    }

    #[test]
    fn zip_code_accepts_five_or_six_digits_only() {
        for good in ["12345", "123456"] {
            let mut draft = valid_draft();
            draft.zip_code = good.into();
            assert!(validate(&draft).is_ok(), "expected {:?} to pass", good);
        }
        for bad in ["1234", "1234567", "12a45"] {
            let mut draft = valid_draft();
            draft.zip_code = bad.into();
            let errors = validate(&draft).unwrap_err();
            assert_eq!(
                errors.get(ContactField::ZipCode),
                Some("Zip code must be 5-6 digits"),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn url_fields_validate_only_when_present() {
        let mut draft = valid_draft();
        draft.facebook = String::new();
        assert!(validate(&draft).is_ok());

        draft.facebook = "not a url".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Facebook),
            Some("Must be a valid URL")
        );

        draft.facebook = "https://facebook.com/ravi".into();
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn whatsapp_link_is_checked_too() {
        let mut draft = valid_draft();
        draft.whatsapp = "wa me slash ravi".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Whatsapp),
            Some("Must be a valid URL")
        );
    }

    #[test]
    fn future_birthday_is_rejected() {
        let mut draft = valid_draft();
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        draft.birthday = tomorrow.format("%Y-%m-%d").to_string();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Birthday),
            Some("Birthday cannot be in the future")
        );
    }

    #[test]
    fn past_and_unset_birthdays_pass() {
        let mut draft = valid_draft();
        draft.birthday = "1990-07-15".into();
        let values = validate(&draft).unwrap();
        assert_eq!(
            values.birthday,
            Some(NaiveDate::from_ymd_opt(1990, 7, 15).unwrap())
        );

        draft.birthday = String::new();
        assert_eq!(validate(&draft).unwrap().birthday, None);
    }

    #[test]
    fn unparsable_birthday_is_reported() {
        let mut draft = valid_draft();
        draft.birthday = "15/07/1990".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Birthday),
            Some("Birthday must be a valid date (YYYY-MM-DD)")
        );
    }

    #[test]
    fn unknown_relationship_is_rejected() {
        let mut draft = valid_draft();
        draft.relationship = "boss".into();
        let errors = validate(&draft).unwrap_err();
        assert!(errors
            .get(ContactField::Relationship)
            .unwrap()
            .contains("unknown relationship"));
    }

    #[test]
    fn notes_are_capped_at_500_characters() {
        let mut draft = valid_draft();
        draft.notes = "x".repeat(500);
        assert!(validate(&draft).is_ok());

        draft.notes = "x".repeat(501);
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Notes),
            Some("Notes cannot exceed 500 characters")
        );
    }
}
