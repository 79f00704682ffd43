use super::RecordStore;
use crate::error::{OrgzError, Result};
use crate::model::{Collection, Record};
use std::collections::HashMap;

/// In-memory storage for testing. Does NOT persist data.
///
/// Records are kept as JSON values keyed by collection, so the store can
/// hold all four record types without knowing them individually.
#[derive(Default)]
pub struct InMemoryStore {
    collections: HashMap<Collection, Vec<serde_json::Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn load<R: Record>(&self) -> Result<Vec<R>> {
        let rows = match self.collections.get(&R::COLLECTION) {
            Some(rows) => rows,
            None => return Ok(Vec::new()),
        };
        rows.iter()
            .map(|row| serde_json::from_value(row.clone()).map_err(OrgzError::Serialization))
            .collect()
    }

    fn save<R: Record>(&mut self, records: &[R]) -> Result<()> {
        let rows = records
            .iter()
            .map(|record| serde_json::to_value(record).map_err(OrgzError::Serialization))
            .collect::<Result<Vec<_>>>()?;
        self.collections.insert(R::COLLECTION, rows);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Contact, FinanceRecord, Note, Priority, Task};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_note(mut self, id: u32, title: &str) -> Self {
            let mut notes: Vec<Note> = self.store.load().unwrap();
            let mut note = Note::new(title.to_string(), format!("content of {}", title));
            note.set_id(id);
            notes.push(note);
            self.store.save(&notes).unwrap();
            self
        }

        pub fn with_task(mut self, id: u32, title: &str, done: bool) -> Self {
            let mut tasks: Vec<Task> = self.store.load().unwrap();
            let mut task = Task::new(title.to_string(), String::new(), Priority::default(), None);
            task.set_id(id);
            task.done = done;
            tasks.push(task);
            self.store.save(&tasks).unwrap();
            self
        }

        pub fn with_contact(mut self, id: u32, name: &str, phone: &str) -> Self {
            let mut contacts: Vec<Contact> = self.store.load().unwrap();
            let mut contact =
                Contact::new(name.to_string(), phone.to_string(), format!("{}@example.com", name));
            contact.set_id(id);
            contacts.push(contact);
            self.store.save(&contacts).unwrap();
            self
        }

        pub fn with_finance_record(mut self, id: u32, amount: f64, category: &str, date: &str) -> Self {
            let mut records: Vec<FinanceRecord> = self.store.load().unwrap();
            let mut record = FinanceRecord::new(
                amount,
                category.to_string(),
                format!("{} entry", category),
                date.to_string(),
            );
            record.set_id(id);
            records.push(record);
            self.store.save(&records).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Task};

    #[test]
    fn empty_store_loads_nothing() {
        let store = InMemoryStore::new();
        let notes: Vec<Note> = store.load().unwrap();
        assert!(notes.is_empty());
        assert_eq!(store.next_id::<Note>().unwrap(), 1);
    }

    #[test]
    fn save_replaces_the_collection() {
        let mut store = InMemoryStore::new();
        let mut a = Note::new("a".into(), "".into());
        a.set_id(1);
        let mut b = Note::new("b".into(), "".into());
        b.set_id(2);

        store.save(&[a.clone(), b.clone()]).unwrap();
        store.save(&[b.clone()]).unwrap();

        let notes: Vec<Note> = store.load().unwrap();
        assert_eq!(notes, vec![b]);
    }

    #[test]
    fn collections_do_not_interfere() {
        let mut store = InMemoryStore::new();
        let mut note = Note::new("n".into(), "".into());
        note.set_id(9);
        store.save(&[note]).unwrap();

        let tasks: Vec<Task> = store.load().unwrap();
        assert!(tasks.is_empty());
        assert_eq!(store.next_id::<Task>().unwrap(), 1);
        assert_eq!(store.next_id::<Note>().unwrap(), 10);
    }
}
