use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S) -> Result<CmdResult> {
    let records = store.list_records()?;
    if records.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Address book is empty")));
    }
    Ok(CmdResult::default().with_listed_records(records))
}
