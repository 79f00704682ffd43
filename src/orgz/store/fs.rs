use super::RecordStore;
use crate::error::{OrgzError, Result};
use crate::model::{Collection, Record};
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(OrgzError::Io)?;
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load<R: Record>(&self) -> Result<Vec<R>> {
        let path = self.collection_path(R::COLLECTION);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(OrgzError::Io)?;
        let records: Vec<R> =
            serde_json::from_str(&content).map_err(OrgzError::Serialization)?;
        Ok(records)
    }

    fn save<R: Record>(&mut self, records: &[R]) -> Result<()> {
        self.ensure_root()?;
        let path = self.collection_path(R::COLLECTION);
        let content = serde_json::to_string_pretty(records).map_err(OrgzError::Serialization)?;
        fs::write(path, content).map_err(OrgzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Note, Task};
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> FileStore {
        FileStore::new(temp.path().to_path_buf())
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let notes: Vec<Note> = store.load().unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        let mut note = Note::new("Title".into(), "Content".into());
        note.set_id(1);
        store.save(&[note.clone()]).unwrap();

        let loaded: Vec<Note> = store.load().unwrap();
        assert_eq!(loaded, vec![note]);
    }

    #[test]
    fn collections_persist_independently() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        let mut note = Note::new("N".into(), "".into());
        note.set_id(1);
        store.save(&[note]).unwrap();

        let tasks: Vec<Task> = store.load().unwrap();
        assert!(tasks.is_empty());
        assert!(temp.path().join("notes.json").exists());
        assert!(!temp.path().join("tasks.json").exists());
    }

    #[test]
    fn state_survives_a_new_store_instance() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let mut contact = Contact::new("Ada".into(), "555".into(), "a@b.c".into());
        contact.set_id(1);
        store.save(&[contact.clone()]).unwrap();

        let reopened = store_in(&temp);
        let loaded: Vec<Contact> = reopened.load().unwrap();
        assert_eq!(loaded, vec![contact]);
    }

    #[test]
    fn backing_file_is_an_array_of_objects() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let mut note = Note::new("T".into(), "C".into());
        note.set_id(7);
        store.save(&[note]).unwrap();

        let raw = std::fs::read_to_string(temp.path().join("notes.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], 7);
        assert_eq!(value[0]["title"], "T");
    }

    #[test]
    fn next_id_starts_at_one() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert_eq!(store.next_id::<Note>().unwrap(), 1);
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        let notes: Vec<Note> = [1, 3, 5]
            .iter()
            .map(|&id| {
                let mut n = Note::new(format!("n{}", id), "".into());
                n.set_id(id);
                n
            })
            .collect();
        store.save(&notes).unwrap();

        assert_eq!(store.next_id::<Note>().unwrap(), 6);
    }

    #[test]
    fn next_id_tracks_external_edits() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let mut note = Note::new("n".into(), "".into());
        note.set_id(1);
        store.save(&[note]).unwrap();
        assert_eq!(store.next_id::<Note>().unwrap(), 2);

        // Simulate an external edit of the backing file.
        let raw = std::fs::read_to_string(temp.path().join("notes.json")).unwrap();
        let edited = raw.replace("\"id\": 1", "\"id\": 41");
        std::fs::write(temp.path().join("notes.json"), edited).unwrap();

        assert_eq!(store.next_id::<Note>().unwrap(), 42);
    }
}
