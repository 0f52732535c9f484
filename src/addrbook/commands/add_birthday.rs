use crate::commands::{contact_not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Birthday, Name};
use crate::store::ContactStore;
use tracing::debug;

/// Sets the birthday on an existing contact, replacing any earlier one.
pub fn run<S: ContactStore>(store: &mut S, name: &Name, birthday: Birthday) -> Result<CmdResult> {
    let Some(mut record) = store.get_record(name)? else {
        return Ok(CmdResult::default().with_message(contact_not_found(name)));
    };

    let previous = record.set_birthday(birthday);
    store.save_record(&record)?;
    debug!(%name, %birthday, replaced = previous.is_some(), "birthday set");

    let message = match previous {
        Some(_) => CmdMessage::success(format!("Birthday updated for {}", name)),
        None => CmdMessage::success(format!("Birthday added for {}", name)),
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_records(vec![record]))
}
