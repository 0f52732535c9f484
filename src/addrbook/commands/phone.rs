use crate::commands::{contact_not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Phone};
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S, name: &Name) -> Result<CmdResult> {
    let Some(record) = store.get_record(name)? else {
        return Ok(CmdResult::default().with_message(contact_not_found(name)));
    };

    let message = if record.phones().is_empty() {
        CmdMessage::info(format!("No phone number set for {}", name))
    } else {
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        CmdMessage::info(format!("{}'s phone number: {}", name, phones.join(", ")))
    };

    Ok(CmdResult::default()
        .with_message(message)
        .with_listed_records(vec![record]))
}
