use crate::dates::{self, DATE_FORMAT};
use crate::error::{OrgzError, Result};
use crate::model::FinanceRecord;
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Totals for a date range, plus the records behind them and the CSV the
/// detail was written to.
#[derive(Debug)]
pub struct ReportOutcome {
    /// Sum of positive amounts in range.
    pub income: f64,
    /// Sum of negative amounts in range (itself negative).
    pub expense: f64,
    /// Net balance: income + expense.
    pub balance: f64,
    pub records: Vec<FinanceRecord>,
    pub report_path: PathBuf,
}

/// Summarize finance activity between `from` and `to` (inclusive) and
/// write the matching records to a dated report CSV in `out_dir`.
pub fn run<S: RecordStore>(
    store: &S,
    from: NaiveDate,
    to: NaiveDate,
    out_dir: &Path,
) -> Result<ReportOutcome> {
    let records = store.load::<FinanceRecord>()?;
    // Records with unparseable dates (possible via hand-edited imports)
    // fall outside every range.
    let in_range: Vec<FinanceRecord> = records
        .into_iter()
        .filter(|record| {
            dates::parse(&record.date)
                .map(|date| from <= date && date <= to)
                .unwrap_or(false)
        })
        .collect();

    let income: f64 = in_range.iter().map(|r| r.amount).filter(|a| *a > 0.0).sum();
    let expense: f64 = in_range.iter().map(|r| r.amount).filter(|a| *a < 0.0).sum();

    let file_name = format!(
        "finance_report_{}_{}.csv",
        from.format(DATE_FORMAT),
        to.format(DATE_FORMAT)
    );
    let report_path = out_dir.join(file_name);
    let mut writer = csv::Writer::from_path(&report_path).map_err(OrgzError::Csv)?;
    for record in &in_range {
        writer.serialize(record).map_err(OrgzError::Csv)?;
    }
    writer.flush().map_err(OrgzError::Io)?;

    Ok(ReportOutcome {
        income,
        expense,
        balance: income + expense,
        records: in_range,
        report_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    fn range(from: &str, to: &str) -> (NaiveDate, NaiveDate) {
        (dates::parse(from).unwrap(), dates::parse(to).unwrap())
    }

    #[test]
    fn sums_income_and_expense_separately() {
        let fixture = StoreFixture::new()
            .with_finance_record(1, 100.0, "salary", "05-03-2024")
            .with_finance_record(2, -40.0, "food", "10-03-2024");
        let temp = TempDir::new().unwrap();
        let (from, to) = range("01-03-2024", "31-03-2024");

        let outcome = run(&fixture.store, from, to, temp.path()).unwrap();
        assert_eq!(outcome.income, 100.0);
        assert_eq!(outcome.expense, -40.0);
        assert_eq!(outcome.balance, 60.0);
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let fixture = StoreFixture::new()
            .with_finance_record(1, 10.0, "a", "01-03-2024")
            .with_finance_record(2, 20.0, "b", "31-03-2024")
            .with_finance_record(3, 30.0, "c", "01-04-2024");
        let temp = TempDir::new().unwrap();
        let (from, to) = range("01-03-2024", "31-03-2024");

        let outcome = run(&fixture.store, from, to, temp.path()).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.income, 30.0);
    }

    #[test]
    fn writes_the_dated_report_file() {
        let fixture = StoreFixture::new().with_finance_record(1, 50.0, "salary", "15-06-2024");
        let temp = TempDir::new().unwrap();
        let (from, to) = range("01-06-2024", "30-06-2024");

        let outcome = run(&fixture.store, from, to, temp.path()).unwrap();
        assert_eq!(
            outcome.report_path,
            temp.path().join("finance_report_01-06-2024_30-06-2024.csv")
        );
        let content = std::fs::read_to_string(&outcome.report_path).unwrap();
        assert!(content.contains("salary"));
        assert!(content.starts_with("id,amount,category,description,date"));
    }

    #[test]
    fn empty_range_yields_zero_totals() {
        let fixture = StoreFixture::new().with_finance_record(1, 50.0, "salary", "15-06-2024");
        let temp = TempDir::new().unwrap();
        let (from, to) = range("01-01-2020", "31-01-2020");

        let outcome = run(&fixture.store, from, to, temp.path()).unwrap();
        assert_eq!(outcome.income, 0.0);
        assert_eq!(outcome.expense, 0.0);
        assert_eq!(outcome.balance, 0.0);
        assert!(outcome.records.is_empty());
        assert!(outcome.report_path.exists());
    }
}
