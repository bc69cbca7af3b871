//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for all
//! contact book operations, regardless of the UI driving them. It
//! dispatches to the appropriate command function and returns structured
//! `Result<CmdResult>` values; business logic lives in `commands/*.rs` and
//! presentation stays with the caller.
//!
//! `ContactBookApi<R: Remote>` is generic over the transport:
//! - Production: `ContactBookApi<HttpRemote>`
//! - Testing: `ContactBookApi<InMemoryRemote>`
//!
//! which keeps the whole facade testable without a network.

use std::path::PathBuf;

use crate::commands;
use crate::error::Result;
use crate::filter::ContactFilter;
use crate::form::ContactPatch;
use crate::model::ContactId;
use crate::store::{ContactStore, Remote};

pub struct ContactBookApi<R: Remote> {
    store: ContactStore<R>,
    config_dir: PathBuf,
}

impl<R: Remote> ContactBookApi<R> {
    pub fn new(remote: R, config_dir: PathBuf) -> Self {
        Self {
            store: ContactStore::new(remote),
            config_dir,
        }
    }

    /// Initialize the store: fetch the collection from the remote.
    pub async fn load(&mut self) -> Result<()> {
        self.store.load().await
    }

    pub fn list(&self, filter: &ContactFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub async fn add(&mut self, patch: &ContactPatch) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, patch).await
    }

    pub async fn edit(
        &mut self,
        id: &ContactId,
        patch: &ContactPatch,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, patch).await
    }

    pub fn view(&self, id: &ContactId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub async fn delete(
        &mut self,
        id: &ContactId,
        skip_confirm: bool,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id, skip_confirm).await
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryRemote;

    #[tokio::test]
    async fn dispatches_a_full_add_list_delete_cycle() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut api = ContactBookApi::new(InMemoryRemote::new(), temp_dir.path().to_path_buf());
        api.load().await.unwrap();

        let patch = ContactPatch {
            name: Some("Ravi Kumar".into()),
            email: Some("ravi@gmail.com".into()),
            phone: Some("9876543210".into()),
            city: Some("Pune".into()),
            state: Some("Maharashtra".into()),
            zip_code: Some("411001".into()),
            country: Some("India".into()),
            relationship: Some("friend".into()),
            ..ContactPatch::default()
        };
        let added = api.add(&patch).await.unwrap();
        let id = added.affected[0].id.clone();

        let listing = api.list(&ContactFilter::default()).unwrap();
        assert_eq!(listing.listed.len(), 1);

        let viewed = api.view(&id).unwrap();
        assert_eq!(viewed.listed[0].id, id);

        api.delete(&id, true).await.unwrap();
        let listing = api.list(&ContactFilter::default()).unwrap();
        assert!(listing.listed.is_empty());
    }
}
