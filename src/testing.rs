use std::collections::BTreeSet;

use crate::{
    domain::RecordMapping,
    errors::{BudgetError, Result},
    storage::RecordStorage,
};

/// Storage whose every operation fails, for exercising fallback paths.
pub struct FailingStorage;

fn unavailable<T>() -> Result<T> {
    Err(BudgetError::Storage("store unavailable".into()))
}

impl RecordStorage for FailingStorage {
    fn document_exists(&self, _name: &str) -> Result<bool> {
        unavailable()
    }

    fn list_documents(&self) -> Result<BTreeSet<String>> {
        unavailable()
    }

    fn delete_document(&self, _name: &str) -> Result<bool> {
        unavailable()
    }

    fn read_document(&self, _name: &str) -> Result<Vec<RecordMapping>> {
        unavailable()
    }

    fn write_document(&self, _name: &str, _mappings: &[RecordMapping]) -> Result<()> {
        unavailable()
    }
}
