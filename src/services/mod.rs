//! Read-only aggregation over the default document. These services favour
//! returning empty or zero values over propagating errors.

pub mod insight_service;
pub mod summary_service;

pub use insight_service::InsightService;
pub use summary_service::{round_cents, BudgetSummary, SummaryService};
