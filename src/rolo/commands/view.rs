use crate::commands::CmdResult;
use crate::error::{Result, RoloError};
use crate::model::ContactId;
use crate::store::{ContactStore, Remote};

/// Locate the record in the local collection; absence is signalled as
/// not-found so the CLI can fall back to the listing view.
pub fn run<R: Remote>(store: &ContactStore<R>, id: &ContactId) -> Result<CmdResult> {
    let contact = store
        .get(id)
        .cloned()
        .ok_or_else(|| RoloError::NotFound(id.clone()))?;
    Ok(CmdResult::default().with_listed(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, InMemoryRemote};

    #[tokio::test]
    async fn returns_the_matching_record() {
        let remote = InMemoryRemote::with_contacts(vec![fixtures::contact(
            "1",
            fixtures::values("Ravi Kumar", "ravi@gmail.com", "9876543210"),
        )]);
        let mut store = ContactStore::new(remote);
        store.load().await.unwrap();

        let result = run(&store, &ContactId::new("1")).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].values.name, "Ravi Kumar");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut store = ContactStore::new(InMemoryRemote::new());
        store.load().await.unwrap();

        let err = run(&store, &ContactId::new("missing")).unwrap_err();
        assert!(matches!(err, RoloError::NotFound(_)));
    }
}
