use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{self, ContactFilter};
use crate::store::{ContactStore, Remote};

pub fn run<R: Remote>(store: &ContactStore<R>, filter: &ContactFilter) -> Result<CmdResult> {
    let listed = filter::apply(store.contacts(), filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
