use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::model::ContactId;
use crate::store::{ContactStore, Remote};
use std::io::{self, Write};

pub async fn run<R: Remote>(
    store: &mut ContactStore<R>,
    id: &ContactId,
    skip_confirm: bool,
) -> Result<CmdResult> {
    let contact = store
        .get(id)
        .cloned()
        .ok_or_else(|| RoloError::NotFound(id.clone()))?;

    if !skip_confirm {
        println!("Are you sure you want to delete this contact?");
        println!("  {} <{}>", contact.values.name, contact.values.email);
        print!("[Y] to confirm: ");
        io::stdout().flush().map_err(RoloError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(RoloError::Io)?;

        if input.trim() != "Y" {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(result);
        }
    }

    store.remove(id).await?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted: {}",
        contact.values.name
    )));
    result.affected.push(contact);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, InMemoryRemote};

    async fn loaded_store() -> ContactStore<InMemoryRemote> {
        let remote = InMemoryRemote::with_contacts(vec![fixtures::contact(
            "1",
            fixtures::values("Ravi Kumar", "ravi@gmail.com", "9876543210"),
        )]);
        let mut store = ContactStore::new(remote);
        store.load().await.unwrap();
        store
    }

    #[tokio::test]
    async fn removes_the_record_when_confirmed() {
        let mut store = loaded_store().await;
        let id = ContactId::new("1");

        let result = run(&mut store, &id, true).await.unwrap();

        assert!(result.messages[0].content.contains("Contact deleted"));
        assert!(store.get(&id).is_none());
        assert!(store.contacts().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut store = loaded_store().await;
        let err = run(&mut store, &ContactId::new("missing"), true)
            .await
            .unwrap_err();
        assert!(matches!(err, RoloError::NotFound(_)));
        assert_eq!(store.contacts().len(), 1);
    }

    #[tokio::test]
    async fn remote_failure_leaves_the_collection_unchanged() {
        let remote = InMemoryRemote::with_contacts(vec![fixtures::contact(
            "1",
            fixtures::values("Ravi Kumar", "ravi@gmail.com", "9876543210"),
        )]);
        let switch = remote.failure_switch();
        let mut store = ContactStore::new(remote);
        store.load().await.unwrap();
        switch.fail(true);

        let err = run(&mut store, &ContactId::new("1"), true).await.unwrap_err();
        assert!(matches!(err, RoloError::Store(_)));
        assert_eq!(store.contacts().len(), 1);
    }
}
