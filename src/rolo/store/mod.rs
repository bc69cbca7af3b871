//! # Storage Layer
//!
//! The contact collection lives behind two pieces: the [`Remote`] trait,
//! which abstracts the REST transport, and [`ContactStore`], the sole
//! in-memory owner of the collection, synchronized with the remote.
//!
//! ## Implementations
//!
//! - [`http::HttpRemote`]: production client of the REST collaborator
//! - [`memory::InMemoryRemote`]: in-process fake for tests and offline use
//!
//! ## Ownership
//!
//! All mutations flow through a single `&mut ContactStore`; the in-memory
//! collection changes only after the corresponding remote call resolves
//! successfully, so a failed call leaves it untouched.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Contact, ContactId, ContactValues};

pub mod http;
pub mod memory;

/// Abstract transport to the remote contacts resource.
#[async_trait]
pub trait Remote {
    /// Fetch the full collection
    async fn fetch_all(&self) -> Result<Vec<Contact>>;

    /// Fetch a single record
    async fn fetch(&self, id: &ContactId) -> Result<Contact>;

    /// Create a record; the remote assigns the id
    async fn create(&mut self, values: &ContactValues) -> Result<Contact>;

    /// Replace the record at `id` with new values
    async fn update(&mut self, id: &ContactId, values: &ContactValues) -> Result<Contact>;

    /// Delete the record at `id`
    async fn delete(&mut self, id: &ContactId) -> Result<()>;
}

/// Owner of the in-memory contact collection.
pub struct ContactStore<R: Remote> {
    remote: R,
    contacts: Vec<Contact>,
}

impl<R: Remote> ContactStore<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            contacts: Vec::new(),
        }
    }

    /// Initialization: fetch the full collection and populate the store.
    /// On failure the collection stays empty and the error is surfaced.
    pub async fn load(&mut self) -> Result<()> {
        self.contacts = self.remote.fetch_all().await?;
        Ok(())
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Local lookup, no remote round-trip (the detail view path).
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    /// Transient single-record fetch (the edit prefill path); does not
    /// touch the collection.
    pub async fn fetch(&self, id: &ContactId) -> Result<Contact> {
        self.remote.fetch(id).await
    }

    /// Create remotely, then append the server-assigned record.
    pub async fn add(&mut self, values: ContactValues) -> Result<Contact> {
        let created = self.remote.create(&values).await?;
        self.contacts.push(created.clone());
        Ok(created)
    }

    /// Update remotely, then replace the matching record in place.
    pub async fn update(&mut self, id: &ContactId, values: ContactValues) -> Result<Contact> {
        let updated = self.remote.update(id, &values).await?;
        if let Some(slot) = self.contacts.iter_mut().find(|c| &c.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Delete remotely, then drop the matching record.
    pub async fn remove(&mut self, id: &ContactId) -> Result<()> {
        self.remote.delete(id).await?;
        self.contacts.retain(|c| &c.id != id);
        Ok(())
    }
}
