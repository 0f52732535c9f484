use crate::commands::{contact_not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Name;
use crate::store::ContactStore;
use tracing::debug;

pub fn run<S: ContactStore>(store: &mut S, name: &Name) -> Result<CmdResult> {
    match store.delete_record(name)? {
        Some(record) => {
            debug!(%name, "contact deleted");
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("Contact {} deleted", name)))
                .with_affected_records(vec![record]))
        }
        None => Ok(CmdResult::default().with_message(contact_not_found(name))),
    }
}
