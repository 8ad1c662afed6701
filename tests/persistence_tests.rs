mod common;

use std::fs;

use common::{read_json, temp_store};
use serde_json::json;
use smartbudget::{
    domain::{Amounted, BaseRecord, Expense, Income, NamedEntity, Record},
    errors::ErrorKind,
    storage::{codec, RecordStorage, DEFAULT_DOCUMENT},
};

#[test]
fn reading_missing_document_creates_it_empty() {
    let (store, _guard) = temp_store();
    assert!(store.read_document("nofile.json").unwrap().is_empty());
    let path = store.root().join("nofile.json");
    assert!(path.is_file());
    assert_eq!(read_json(&path), json!([]));
}

#[test]
fn encoded_document_uses_tagged_objects() {
    let (store, _guard) = temp_store();
    let records: Vec<Record> = vec![
        Income::new("Salary", 3000.0, "Work").unwrap().into(),
        Expense::new("Food", 50.0, "Daily").unwrap().into(),
    ];
    store.save_records("scenario.json", &records).unwrap();

    let value = read_json(&store.root().join("scenario.json"));
    assert_eq!(
        value,
        json!([
            {"type": "Income", "name": "Salary", "amount": 3000.0, "source": "work"},
            {"type": "Expense", "name": "Food", "amount": 50.0, "category": "daily"}
        ])
    );
}

#[test]
fn append_extends_existing_records() {
    let (store, _guard) = temp_store();
    let first: Record = Income::new("Salary", 100.0, "work").unwrap().into();
    let second: Record = Expense::new("Taxi", 12.5, "transport").unwrap().into();

    store.append_records(DEFAULT_DOCUMENT, &[first.clone()]).unwrap();
    let before = store.read_document(DEFAULT_DOCUMENT).unwrap();
    store.append_records(DEFAULT_DOCUMENT, &[second.clone()]).unwrap();
    let after = store.read_document(DEFAULT_DOCUMENT).unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[..before.len()], before[..]);
    assert_eq!(store.load_records(DEFAULT_DOCUMENT).unwrap(), vec![first, second]);
}

#[test]
fn clear_leaves_an_empty_array() {
    let (store, _guard) = temp_store();
    let record: Record = BaseRecord::new("Misc", -4.0).unwrap().into();
    store.append_records(DEFAULT_DOCUMENT, &[record]).unwrap();
    assert!(store.clear_document(DEFAULT_DOCUMENT).unwrap());
    assert!(store.read_document(DEFAULT_DOCUMENT).unwrap().is_empty());
}

#[test]
fn hand_edited_documents_are_normalized_on_decode() {
    let (store, _guard) = temp_store();
    fs::create_dir_all(store.root()).unwrap();
    fs::write(
        store.root().join("edited.json"),
        r#"[
            {"type": "Expense", "name": "Refund", "amount": -20},
            {"type": "Income", "name": " Bonus ", "amount": 5, "source": " Work "},
            {"type": "Gift", "name": "Other", "amount": -1.5}
        ]"#,
    )
    .unwrap();

    let records = store.load_records("edited.json").unwrap();
    let expense = records[0].as_expense().unwrap();
    assert_eq!(expense.amount(), 20.0);
    assert_eq!(expense.category(), codec::DEFAULT_CATEGORY);
    let income = records[1].as_income().unwrap();
    assert_eq!(income.name(), "Bonus");
    assert_eq!(income.source(), "work");
    assert!(matches!(records[2], Record::Base(_)));
    assert_eq!(records[2].amount(), -1.5);
}

#[test]
fn invalid_entries_fail_the_whole_decode() {
    let (store, _guard) = temp_store();
    fs::create_dir_all(store.root()).unwrap();
    fs::write(
        store.root().join("bad.json"),
        r#"[{"type": "Income", "name": "Salary", "amount": "lots"}]"#,
    )
    .unwrap();
    let err = store.load_records("bad.json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn documents_are_listed_and_deleted_by_name() {
    let (store, _guard) = temp_store();
    store.save_records("a.json", &[]).unwrap();
    store.save_records("b.json", &[]).unwrap();
    let names: Vec<_> = store.list_documents().unwrap().into_iter().collect();
    assert_eq!(names, ["a.json", "b.json"]);

    assert!(store.delete_document("a.json").unwrap());
    assert!(!store.delete_document("a.json").unwrap());
    assert!(!store.document_exists("a.json").unwrap());
}
