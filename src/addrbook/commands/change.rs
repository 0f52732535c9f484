use crate::commands::{contact_not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Phone};
use crate::store::ContactStore;
use tracing::debug;

/// Replaces `old` with `new` on the named contact, keeping the phone's position.
///
/// A missing contact or a missing `old` phone is reported, and nothing changes.
pub fn run<S: ContactStore>(store: &mut S, name: &Name, old: &Phone, new: Phone) -> Result<CmdResult> {
    let Some(mut record) = store.get_record(name)? else {
        return Ok(CmdResult::default().with_message(contact_not_found(name)));
    };

    if old != &new && record.find_phone(new.as_str()).is_some() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} already has phone {}",
            name, new
        ))));
    }

    if !record.edit_phone(old, new) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Phone {} not found for {}",
            old, name
        ))));
    }

    store.save_record(&record)?;
    debug!(%name, "phone updated");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Phone number updated for {}", name)))
        .with_affected_records(vec![record]))
}
