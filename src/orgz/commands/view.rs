use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Look a record up by exact id.
pub fn run<S: RecordStore, R: Record>(store: &S, id: u32) -> Result<Option<R>> {
    Ok(store.load::<R>()?.into_iter().find(|r| r.id() == id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_by_id() {
        let fixture = StoreFixture::new().with_note(1, "a").with_note(2, "b");
        let note: Option<Note> = run(&fixture.store, 2).unwrap();
        assert_eq!(note.unwrap().title, "b");
    }

    #[test]
    fn missing_id_is_none() {
        let fixture = StoreFixture::new().with_note(1, "a");
        let note: Option<Note> = run(&fixture.store, 7).unwrap();
        assert!(note.is_none());
    }
}
