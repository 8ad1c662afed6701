use std::collections::BTreeMap;

use tracing::{debug, error, info, warn};

use crate::{
    domain::{Amounted, Expense, Income, LedgerRecord, Record},
    errors::Result,
    storage::{RecordStorage, DEFAULT_DOCUMENT},
};

pub struct InsightService;

impl InsightService {
    /// Loads the default document and splits it into incomes and expenses.
    /// Any read or decode failure yields two empty lists.
    pub fn load_and_split(storage: &dyn RecordStorage) -> (Vec<Income>, Vec<Expense>) {
        match Self::try_load_and_split(storage) {
            Ok(split) => split,
            Err(err) => {
                error!(error = %err, "failed to load records");
                (Vec::new(), Vec::new())
            }
        }
    }

    pub(crate) fn try_load_and_split(
        storage: &dyn RecordStorage,
    ) -> Result<(Vec<Income>, Vec<Expense>)> {
        let records = storage.load_records(DEFAULT_DOCUMENT)?;
        info!(count = records.len(), "loaded records");
        let (incomes, expenses) = Self::split_records(records);
        info!(
            incomes = incomes.len(),
            expenses = expenses.len(),
            "split records"
        );
        Ok((incomes, expenses))
    }

    /// Partitions records by type, keeping relative order. Other records are dropped.
    pub fn split_records(records: Vec<Record>) -> (Vec<Income>, Vec<Expense>) {
        let mut incomes = Vec::new();
        let mut expenses = Vec::new();
        for record in records {
            match record {
                Record::Income(income) => incomes.push(income),
                Record::Expense(expense) => expenses.push(expense),
                Record::Base(base) => {
                    warn!(record = %base, "ignored unsupported record type");
                }
            }
        }
        (incomes, expenses)
    }

    pub fn income_details(storage: &dyn RecordStorage) -> Vec<String> {
        let (incomes, _) = Self::load_and_split(storage);
        Self::describe_all(&incomes)
    }

    pub fn expense_details(storage: &dyn RecordStorage) -> Vec<String> {
        let (_, expenses) = Self::load_and_split(storage);
        Self::describe_all(&expenses)
    }

    /// Describes every record, skipping the ones that cannot be described.
    pub fn describe_all<T: LedgerRecord>(records: &[T]) -> Vec<String> {
        records
            .iter()
            .filter_map(|record| match record.describe() {
                Ok(text) => Some(text),
                Err(err) => {
                    error!(
                        record = record.name(),
                        error = %err,
                        "failed to describe {}",
                        record.type_tag()
                    );
                    None
                }
            })
            .collect()
    }

    /// Sums absolute expense amounts per category for the default document.
    pub fn expense_totals_by_category(storage: &dyn RecordStorage) -> BTreeMap<String, f64> {
        let (_, expenses) = Self::load_and_split(storage);
        Self::category_totals(&expenses)
    }

    pub fn category_totals(expenses: &[Expense]) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.category().to_string()).or_default() += expense.amount().abs();
        }
        debug!(categories = totals.len(), "aggregated expenses by category");
        totals
    }
}
