use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{ContactDraft, ContactForm, ContactPatch};
use crate::model::ContactId;
use crate::store::{ContactStore, Remote};

pub async fn run<R: Remote>(
    store: &mut ContactStore<R>,
    id: &ContactId,
    patch: &ContactPatch,
) -> Result<CmdResult> {
    // Prefill from a fresh single-record fetch, like the edit page does.
    let existing = store.fetch(id).await?;

    let mut form = ContactForm::new(ContactDraft::default());
    form.reinitialize(ContactDraft::from_values(&existing.values));
    form.apply(patch);
    let values = form.submit()?;

    let contact = store.update(id, values).await?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated: {}",
        contact.values.name
    )));
    result.affected.push(contact);
    Ok(result)
}
