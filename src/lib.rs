#![doc(test(attr(deny(warnings))))]

//! SmartBudget keeps income and expense records in JSON documents and
//! computes totals, balances and per-category breakdowns over them.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod testing;

use std::sync::Once;

pub use domain::{BaseRecord, Expense, Income, LedgerRecord, Record};
pub use errors::{BudgetError, ErrorKind, Result};
pub use services::{BudgetSummary, InsightService, SummaryService};
pub use storage::{JsonDocumentStore, RecordStorage, DEFAULT_DOCUMENT};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing, honouring the configured log level.
pub fn init() {
    INIT_TRACING.call_once(|| {
        let level = config::ConfigManager::new()
            .load()
            .ok()
            .and_then(|config| config.log_level);
        utils::init_tracing(level.as_deref());
        tracing::info!("SmartBudget tracing initialized.");
    });
}
