use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::RecordStore;

/// How to look a contact up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactQuery {
    Name(String),
    Phone(String),
}

/// Find every contact matching the query exactly.
pub fn run<S: RecordStore>(store: &S, query: &ContactQuery) -> Result<CmdResult<Contact>> {
    let contacts = store.load::<Contact>()?;
    let matches: Vec<Contact> = contacts
        .into_iter()
        .filter(|contact| match query {
            ContactQuery::Name(name) => contact.name == *name,
            ContactQuery::Phone(phone) => contact.phone == *phone,
        })
        .collect();

    let mut result = CmdResult::default().with_records(matches);
    if result.records.is_empty() {
        result.add_message(CmdMessage::info("No contacts found"));
    }
    Ok(result)
}
