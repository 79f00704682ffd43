use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Look a record up by id and overwrite its fields with `apply`, then
/// persist. A missing id is reported as a warning, not an error; the
/// session continues either way.
pub fn run<S: RecordStore, R: Record>(
    store: &mut S,
    id: u32,
    apply: impl FnOnce(&mut R),
) -> Result<CmdResult<R>> {
    let mut records = store.load::<R>()?;
    let mut result = CmdResult::default();

    let record = match records.iter_mut().find(|r| r.id() == id) {
        Some(record) => record,
        None => {
            result.add_message(CmdMessage::warning(format!(
                "{} #{} not found",
                R::COLLECTION.label(),
                id
            )));
            return Ok(result);
        }
    };

    apply(record);
    let updated = record.clone();
    store.save(&records)?;

    result.add_message(CmdMessage::success(format!(
        "{} #{} updated",
        R::COLLECTION.label(),
        id
    )));
    result.records.push(updated);
    Ok(result)
}
