use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    config::Config,
    domain::RecordMapping,
    errors::{BudgetError, Result},
    utils::{
        paths,
        persistence::{is_staging_file, tmp_path, write_atomic, TMP_SUFFIX},
    },
};

use super::{codec, RecordStorage};

/// Filesystem-backed store keeping one JSON array per document.
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    root: PathBuf,
}

impl JsonDocumentStore {
    /// The root directory is only created on first access.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resolve_store_dir(&paths::app_home()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self, name: &str) -> Result<PathBuf> {
        validate_document_name(name)?;
        Ok(self.root.join(name))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.is_dir() {
            fs::create_dir_all(&self.root)?;
            debug!(root = %self.root.display(), "created store root");
        }
        Ok(())
    }
}

impl RecordStorage for JsonDocumentStore {
    fn document_exists(&self, name: &str) -> Result<bool> {
        self.ensure_root()?;
        Ok(self.document_path(name)?.is_file())
    }

    fn list_documents(&self) -> Result<BTreeSet<String>> {
        self.ensure_root()?;
        let mut names = BTreeSet::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if is_staging_file(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.insert(name.to_string());
            }
        }
        Ok(names)
    }

    fn delete_document(&self, name: &str) -> Result<bool> {
        self.ensure_root()?;
        let path = self.document_path(name)?;
        if path.is_file() {
            fs::remove_file(&path)?;
            info!(document = name, "deleted document");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn read_document(&self, name: &str) -> Result<Vec<RecordMapping>> {
        self.ensure_root()?;
        let path = self.document_path(name)?;
        if !path.exists() {
            self.write_document(name, &[])?;
            info!(document = name, "created empty document");
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        codec::from_json_str(&data).map_err(|err| err.with_context(format!("document `{name}`")))
    }

    fn write_document(&self, name: &str, mappings: &[RecordMapping]) -> Result<()> {
        self.ensure_root()?;
        let path = self.document_path(name)?;
        let json = codec::to_json_string(mappings)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        debug!(document = name, entries = mappings.len(), "wrote document");
        Ok(())
    }
}

/// Keeps document names to plain file names inside the store root. The
/// `.tmp` extension is reserved for staged writes.
fn validate_document_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(&['/', '\\'][..]);
    if invalid {
        return Err(BudgetError::Storage(format!(
            "invalid document name `{name}`"
        )));
    }
    if is_staging_file(Path::new(name)) {
        return Err(BudgetError::Storage(format!(
            "document name `{name}` uses the reserved `.{TMP_SUFFIX}` extension"
        )));
    }
    Ok(())
}
