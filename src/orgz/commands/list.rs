use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Load a collection in storage order for display.
pub fn run<S: RecordStore, R: Record>(store: &S) -> Result<CmdResult<R>> {
    let records = store.load::<R>()?;
    Ok(CmdResult::default().with_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empty_collection_lists_nothing() {
        let fixture = StoreFixture::new();
        let result = run::<_, Note>(&fixture.store).unwrap();
        assert!(result.records.is_empty());
    }

    #[test]
    fn lists_in_storage_order() {
        let fixture = StoreFixture::new().with_note(1, "first").with_note(2, "second");
        let result = run::<_, Note>(&fixture.store).unwrap();
        let titles: Vec<&str> = result.records.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }
}
