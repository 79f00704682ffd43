use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Remove a record by id and persist the filtered collection.
///
/// A missing id leaves storage untouched and is reported as a distinct
/// not-found warning rather than silent success.
pub fn run<S: RecordStore, R: Record>(store: &mut S, id: u32) -> Result<CmdResult<R>> {
    let records = store.load::<R>()?;
    let before = records.len();
    let kept: Vec<R> = records.into_iter().filter(|r| r.id() != id).collect();

    let mut result = CmdResult::default();
    if kept.len() == before {
        result.add_message(CmdMessage::warning(format!(
            "{} #{} not found",
            R::COLLECTION.label(),
            id
        )));
        return Ok(result);
    }

    store.save(&kept)?;
    result.add_message(CmdMessage::success(format!(
        "{} #{} deleted",
        R::COLLECTION.label(),
        id
    )));
    Ok(result)
}
