use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OrgzError, Result};
use crate::model::Record;
use crate::store::RecordStore;
use std::path::Path;

/// Write every record of the collection, in storage order, to its export
/// CSV inside `out_dir`. The header row comes from the record's serde
/// field names, the same contract the JSON store uses.
pub fn run<S: RecordStore, R: Record>(store: &S, out_dir: &Path) -> Result<CmdResult<R>> {
    let records = store.load::<R>()?;
    let path = out_dir.join(R::COLLECTION.export_file_name());

    let mut writer = csv::Writer::from_path(&path).map_err(OrgzError::Csv)?;
    for record in &records {
        writer.serialize(record).map_err(OrgzError::Csv)?;
    }
    writer.flush().map_err(OrgzError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} {} to {}",
        records.len(),
        R::COLLECTION.plural(),
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Task};
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    #[test]
    fn writes_header_plus_one_row_per_record() {
        let fixture = StoreFixture::new().with_note(1, "a").with_note(2, "b");
        let temp = TempDir::new().unwrap();

        let result = run::<_, Note>(&fixture.store, temp.path()).unwrap();
        assert!(result.messages[0].content.contains("Exported 2 notes"));

        let content = std::fs::read_to_string(temp.path().join("notes_export.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,title,content,timestamp");
    }

    #[test]
    fn task_export_keeps_enum_and_bool_fields_readable() {
        let fixture = StoreFixture::new().with_task(1, "t", true);
        let temp = TempDir::new().unwrap();

        run::<_, Task>(&fixture.store, temp.path()).unwrap();
        let content = std::fs::read_to_string(temp.path().join("tasks_export.csv")).unwrap();
        assert!(content.lines().nth(1).unwrap().contains("Medium"));
        assert!(content.lines().nth(1).unwrap().contains("true"));
    }

    #[test]
    fn exporting_an_empty_collection_still_creates_the_file() {
        let fixture = StoreFixture::new();
        let temp = TempDir::new().unwrap();

        let result = run::<_, Note>(&fixture.store, temp.path()).unwrap();
        assert!(result.messages[0].content.contains("Exported 0 notes"));
        assert!(temp.path().join("notes_export.csv").exists());
    }
}
