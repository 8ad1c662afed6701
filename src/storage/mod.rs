pub mod codec;
pub mod json_store;

use std::collections::BTreeSet;

use crate::{
    domain::{Record, RecordMapping},
    errors::Result,
};

/// Name of the document the application reads and appends to.
pub const DEFAULT_DOCUMENT: &str = "records.json";

/// Abstraction over a collection of named record documents.
pub trait RecordStorage: Send + Sync {
    fn document_exists(&self, name: &str) -> Result<bool>;

    /// Names of the stored documents, excluding sub-collections.
    fn list_documents(&self) -> Result<BTreeSet<String>>;

    /// Returns `false` when there was nothing to delete.
    fn delete_document(&self, name: &str) -> Result<bool>;

    /// Reads the raw mappings. A missing document is created empty first.
    fn read_document(&self, name: &str) -> Result<Vec<RecordMapping>>;

    /// Replaces the whole document.
    fn write_document(&self, name: &str, mappings: &[RecordMapping]) -> Result<()>;

    fn load_records(&self, name: &str) -> Result<Vec<Record>> {
        codec::decode(&self.read_document(name)?)
    }

    fn save_records(&self, name: &str, records: &[Record]) -> Result<()> {
        self.write_document(name, &codec::encode(records))
    }

    /// Read-modify-write without locking: concurrent writers race and the last one wins.
    fn append_records(&self, name: &str, new_records: &[Record]) -> Result<()> {
        let mut records = self.load_records(name)?;
        records.extend_from_slice(new_records);
        self.save_records(name, &records)
    }

    fn clear_document(&self, name: &str) -> Result<bool> {
        self.write_document(name, &[])?;
        Ok(true)
    }
}

pub use codec::{DEFAULT_CATEGORY, DEFAULT_SOURCE};
pub use json_store::JsonDocumentStore;
