//! The contact form: a draft of editable field values plus the submit
//! contract. The form is deliberately decoupled from the store — callers
//! decide what to do with the normalized values (create vs. edit), the
//! form only validates and normalizes.

use crate::model::ContactValues;
use crate::validation::{self, ValidationErrors};

/// One string slot per editable field, all present (possibly empty).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
    pub whatsapp: String,
    pub birthday: String,
    pub relationship: String,
    pub notes: String,
}

impl ContactDraft {
    /// Draft prefilled from an existing record (the edit flow).
    pub fn from_values(values: &ContactValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            city: values.city.clone(),
            state: values.state.clone(),
            zip_code: values.zip_code.clone(),
            country: values.country.clone(),
            facebook: values.facebook.clone(),
            twitter: values.twitter.clone(),
            instagram: values.instagram.clone(),
            linkedin: values.linkedin.clone(),
            whatsapp: values.whatsapp.clone(),
            birthday: values
                .birthday
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            relationship: values.relationship.code().to_string(),
            notes: values.notes.clone(),
        }
    }
}

/// Per-field overrides, `None` leaves the underlying draft value untouched.
/// This is the shape the CLI's field flags collect into.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub whatsapp: Option<String>,
    pub birthday: Option<String>,
    pub relationship: Option<String>,
    pub notes: Option<String>,
}

impl ContactPatch {
    pub fn apply(&self, draft: &mut ContactDraft) {
        fn set(slot: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        set(&mut draft.name, &self.name);
        set(&mut draft.email, &self.email);
        set(&mut draft.phone, &self.phone);
        set(&mut draft.city, &self.city);
        set(&mut draft.state, &self.state);
        set(&mut draft.zip_code, &self.zip_code);
        set(&mut draft.country, &self.country);
        set(&mut draft.facebook, &self.facebook);
        set(&mut draft.twitter, &self.twitter);
        set(&mut draft.instagram, &self.instagram);
        set(&mut draft.linkedin, &self.linkedin);
        set(&mut draft.whatsapp, &self.whatsapp);
        set(&mut draft.birthday, &self.birthday);
        set(&mut draft.relationship, &self.relationship);
        set(&mut draft.notes, &self.notes);
    }
}

/// Holds the current draft; validates and normalizes on submit.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactDraft,
}

impl ContactForm {
    pub fn new(initial: ContactDraft) -> Self {
        Self { fields: initial }
    }

    /// Replace the displayed values with a fresh initial set, as the edit
    /// flow does once its fetch resolves.
    pub fn reinitialize(&mut self, initial: ContactDraft) {
        self.fields = initial;
    }

    pub fn fields(&self) -> &ContactDraft {
        &self.fields
    }

    pub fn apply(&mut self, patch: &ContactPatch) {
        patch.apply(&mut self.fields);
    }

    /// Run validation; either every field passes and the normalized values
    /// come back, or submission is blocked with per-field errors.
    pub fn submit(&self) -> Result<ContactValues, ValidationErrors> {
        validation::validate(&self.fields)
    }
}
