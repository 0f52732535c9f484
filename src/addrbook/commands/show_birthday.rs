use crate::commands::{contact_not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Name;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S, name: &Name) -> Result<CmdResult> {
    let Some(record) = store.get_record(name)? else {
        return Ok(CmdResult::default().with_message(contact_not_found(name)));
    };

    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(format!("{}'s birthday: {}", name, birthday)),
        None => CmdMessage::info(format!("No birthday set for {}", name)),
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_listed_records(vec![record]))
}
