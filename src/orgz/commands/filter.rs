use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::FinanceRecord;
use crate::store::RecordStore;

/// Optional narrowing of the finance listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinanceFilter {
    /// Exact DD-MM-YYYY date match.
    Date(String),
    /// Exact category match.
    Category(String),
    All,
}

pub fn run<S: RecordStore>(store: &S, filter: &FinanceFilter) -> Result<CmdResult<FinanceRecord>> {
    let records = store.load::<FinanceRecord>()?;
    let filtered: Vec<FinanceRecord> = records
        .into_iter()
        .filter(|record| match filter {
            FinanceFilter::Date(date) => record.date == *date,
            FinanceFilter::Category(category) => record.category == *category,
            FinanceFilter::All => true,
        })
        .collect();

    Ok(CmdResult::default().with_records(filtered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn sample() -> StoreFixture {
        StoreFixture::new()
            .with_finance_record(1, 100.0, "salary", "01-03-2024")
            .with_finance_record(2, -40.0, "food", "01-03-2024")
            .with_finance_record(3, -15.0, "food", "02-03-2024")
    }

    #[test]
    fn no_filter_lists_all() {
        let fixture = sample();
        let result = run(&fixture.store, &FinanceFilter::All).unwrap();
        assert_eq!(result.records.len(), 3);
    }

    #[test]
    fn date_filter_is_exact() {
        let fixture = sample();
        let result = run(&fixture.store, &FinanceFilter::Date("01-03-2024".into())).unwrap();
        assert_eq!(result.records.len(), 2);
    }

    #[test]
    fn category_filter_is_exact() {
        let fixture = sample();
        let result = run(&fixture.store, &FinanceFilter::Category("food".into())).unwrap();
        assert_eq!(result.records.len(), 2);
        assert!(result.records.iter().all(|r| r.category == "food"));

        let result = run(&fixture.store, &FinanceFilter::Category("Food".into())).unwrap();
        assert!(result.records.is_empty());
    }
}
