use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OrgzError, Result};
use crate::model::Record;
use crate::store::RecordStore;
use std::collections::HashSet;
use std::path::Path;

/// Import records from a CSV file with the same column contract as export.
///
/// Each row's id is checked against every id already present, including
/// rows imported earlier in this same run; collisions get a fresh id.
/// The collection is persisted exactly once, after all rows parsed, so a
/// malformed row never leaves a partial import behind.
pub fn run<S: RecordStore, R: Record>(store: &mut S, path: &Path) -> Result<CmdResult<R>> {
    let mut records = store.load::<R>()?;
    let mut ids: HashSet<u32> = records.iter().map(Record::id).collect();
    let mut next = records.iter().map(Record::id).max().map_or(1, |max| max + 1);

    let mut reader = csv::Reader::from_path(path).map_err(OrgzError::Csv)?;
    let mut result = CmdResult::default();
    let mut imported = 0usize;

    for row in reader.deserialize::<R>() {
        let mut record = row.map_err(OrgzError::Csv)?;
        if ids.contains(&record.id()) {
            result.add_message(CmdMessage::info(format!(
                "{} id {} already taken, reassigned to {}",
                R::COLLECTION.label(),
                record.id(),
                next
            )));
            record.set_id(next);
        }
        ids.insert(record.id());
        next = next.max(record.id() + 1);
        records.push(record);
        imported += 1;
    }

    store.save(&records)?;
    result.add_message(CmdMessage::success(format!(
        "Imported {} {} from {}",
        imported,
        R::COLLECTION.plural(),
        path.display()
    )));
    Ok(result)
}
