use tracing::{debug, error, info};

use crate::{domain::LedgerRecord, storage::RecordStorage};

use super::InsightService;

/// Aggregate figures for the default document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub income_count: usize,
    pub expense_count: usize,
}

pub struct SummaryService;

impl SummaryService {
    pub fn total_income(storage: &dyn RecordStorage) -> f64 {
        let (incomes, _) = InsightService::load_and_split(storage);
        info!(entries = incomes.len(), "calculating total income");
        let total = Self::safe_sum(&incomes);
        debug!(total, "total income computed");
        total
    }

    pub fn total_expenses(storage: &dyn RecordStorage) -> f64 {
        let (_, expenses) = InsightService::load_and_split(storage);
        info!(entries = expenses.len(), "calculating total expenses");
        let total = Self::safe_sum(&expenses);
        debug!(total, "total expenses computed");
        total
    }

    /// Income minus expenses. Falls back to `0.0` when the records cannot be read.
    pub fn budget_balance(storage: &dyn RecordStorage) -> f64 {
        match InsightService::try_load_and_split(storage) {
            Ok((incomes, expenses)) => {
                let balance = round_cents(Self::safe_sum(&incomes) - Self::safe_sum(&expenses));
                info!(balance, "budget balance computed");
                balance
            }
            Err(err) => {
                error!(error = %err, "failed to compute budget balance");
                0.0
            }
        }
    }

    /// Computes every figure from a single load of the default document.
    pub fn summarize(storage: &dyn RecordStorage) -> BudgetSummary {
        let (incomes, expenses) = InsightService::load_and_split(storage);
        let total_income = Self::safe_sum(&incomes);
        let total_expenses = Self::safe_sum(&expenses);
        BudgetSummary {
            total_income,
            total_expenses,
            balance: round_cents(total_income - total_expenses),
            income_count: incomes.len(),
            expense_count: expenses.len(),
        }
    }

    /// Sums amounts rounded to cents, skipping values that are not finite numbers.
    pub fn safe_sum<T: LedgerRecord>(records: &[T]) -> f64 {
        let mut total = 0.0;
        for record in records {
            let value = record.amount();
            if value.is_finite() {
                total += value;
            } else {
                error!(record = record.name(), "failed to read amount");
            }
        }
        round_cents(total)
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
