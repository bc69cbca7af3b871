use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{ContactDraft, ContactForm, ContactPatch};
use crate::store::{ContactStore, Remote};

pub async fn run<R: Remote>(
    store: &mut ContactStore<R>,
    patch: &ContactPatch,
) -> Result<CmdResult> {
    let mut form = ContactForm::new(ContactDraft::default());
    form.apply(patch);
    let values = form.submit()?;

    let contact = store.add(values).await?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added: {}",
        contact.values.name
    )));
    result.affected.push(contact);
    Ok(result)
}
