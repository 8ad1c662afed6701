mod common;

use common::temp_store;
use smartbudget::{
    domain::{BaseRecord, Expense, Income, NamedEntity, Record},
    services::{InsightService, SummaryService},
    storage::{RecordStorage, DEFAULT_DOCUMENT},
};

fn seed(store: &dyn RecordStorage, records: Vec<Record>) {
    store.append_records(DEFAULT_DOCUMENT, &records).unwrap();
}

#[test]
fn load_and_split_drops_base_records() {
    let (store, _guard) = temp_store();
    seed(
        &store,
        vec![
            Income::new("Salary", 3000.0, "work").unwrap().into(),
            Expense::new("Taxi", 15.0, "transport").unwrap().into(),
            BaseRecord::new("Misc", 5.0).unwrap().into(),
        ],
    );
    let (incomes, expenses) = InsightService::load_and_split(&store);
    assert_eq!(incomes.len(), 1);
    assert_eq!(incomes[0].name(), "Salary");
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].name(), "Taxi");
}

#[test]
fn totals_and_balance_over_default_document() {
    let (store, _guard) = temp_store();
    seed(
        &store,
        vec![
            Income::new("Salary", 100.0, "work").unwrap().into(),
            Income::new("Gift", 50.0, "family").unwrap().into(),
            Expense::new("Taxi", 30.0, "transport").unwrap().into(),
        ],
    );
    assert_eq!(SummaryService::total_income(&store), 150.0);
    assert_eq!(SummaryService::total_expenses(&store), 30.0);
    assert_eq!(SummaryService::budget_balance(&store), 120.0);
}

#[test]
fn corrupted_default_document_degrades_to_empty() {
    let (store, _guard) = temp_store();
    std::fs::create_dir_all(store.root()).unwrap();
    std::fs::write(store.root().join(DEFAULT_DOCUMENT), "{ not json").unwrap();

    assert!(InsightService::income_details(&store).is_empty());
    assert!(InsightService::expense_details(&store).is_empty());
    assert_eq!(SummaryService::total_income(&store), 0.0);
    assert_eq!(SummaryService::budget_balance(&store), 0.0);
    assert!(store.load_records(DEFAULT_DOCUMENT).is_err());
}

#[test]
fn details_and_category_totals() {
    let (store, _guard) = temp_store();
    seed(
        &store,
        vec![
            Expense::new("Taxi", 15.0, "Transport").unwrap().into(),
            Expense::new("Lunch", 12.0, "food").unwrap().into(),
            Expense::new("Bus", 3.0, "transport").unwrap().into(),
        ],
    );
    let details = InsightService::expense_details(&store);
    assert_eq!(details.len(), 3);
    assert!(details[0].starts_with("Expense Record"));
    assert!(details[0].contains("transport"));

    let totals = InsightService::expense_totals_by_category(&store);
    assert_eq!(totals["transport"], 18.0);
    assert_eq!(totals["food"], 12.0);

    let summary = SummaryService::summarize(&store);
    assert_eq!(summary.total_expenses, 30.0);
    assert_eq!(summary.balance, -30.0);
    assert_eq!(summary.expense_count, 3);
}
