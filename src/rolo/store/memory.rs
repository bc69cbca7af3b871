use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use super::Remote;
use crate::error::{Result, RoloError};
use crate::model::{Contact, ContactId, ContactValues};

/// In-process stand-in for the remote API, for tests and offline use.
/// Ids are minted locally; nothing persists beyond the value itself.
#[derive(Default)]
pub struct InMemoryRemote {
    contacts: Vec<Contact>,
    failing: Arc<AtomicBool>,
}

/// Handle that flips an [`InMemoryRemote`] into a failing mode after it has
/// been moved into a store, to exercise error paths.
#[derive(Clone)]
pub struct FailureSwitch(Arc<AtomicBool>);

impl FailureSwitch {
    pub fn fail(&self, on: bool) {
        self.0.store(on, Ordering::SeqCst);
    }
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn failure_switch(&self) -> FailureSwitch {
        FailureSwitch(self.failing.clone())
    }

    fn guard(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RoloError::Store("remote unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Remote for InMemoryRemote {
    async fn fetch_all(&self) -> Result<Vec<Contact>> {
        self.guard()?;
        Ok(self.contacts.clone())
    }

    async fn fetch(&self, id: &ContactId) -> Result<Contact> {
        self.guard()?;
        self.contacts
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| RoloError::NotFound(id.clone()))
    }

    async fn create(&mut self, values: &ContactValues) -> Result<Contact> {
        self.guard()?;
        let contact = Contact {
            id: ContactId::new(Uuid::new_v4().to_string()),
            values: values.clone(),
        };
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update(&mut self, id: &ContactId, values: &ContactValues) -> Result<Contact> {
        self.guard()?;
        let slot = self
            .contacts
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| RoloError::NotFound(id.clone()))?;
        slot.values = values.clone();
        Ok(slot.clone())
    }

    async fn delete(&mut self, id: &ContactId) -> Result<()> {
        self.guard()?;
        let position = self
            .contacts
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| RoloError::NotFound(id.clone()))?;
        self.contacts.remove(position);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Relationship;

    pub fn values(name: &str, email: &str, phone: &str) -> ContactValues {
        values_with(name, email, phone, Relationship::Friend)
    }

    pub fn values_with(
        name: &str,
        email: &str,
        phone: &str,
        relationship: Relationship,
    ) -> ContactValues {
        ContactValues {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            zip_code: "411001".to_string(),
            country: "India".to_string(),
            facebook: String::new(),
            twitter: String::new(),
            instagram: String::new(),
            linkedin: String::new(),
            whatsapp: String::new(),
            birthday: None,
            relationship,
            notes: String::new(),
        }
    }

    pub fn contact(id: &str, values: ContactValues) -> Contact {
        Contact {
            id: ContactId::new(id),
            values,
        }
    }
}
