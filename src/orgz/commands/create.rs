use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Allocate the next free id for the record's collection, append the
/// record and persist the whole collection.
pub fn run<S: RecordStore, R: Record>(store: &mut S, mut record: R) -> Result<CmdResult<R>> {
    let id = store.next_id::<R>()?;
    record.set_id(id);

    let mut records = store.load::<R>()?;
    records.push(record.clone());
    store.save(&records)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} #{} added",
        R::COLLECTION.label(),
        id
    )));
    result.records.push(record);
    Ok(result)
}
