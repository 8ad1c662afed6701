use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

/// Extension of the staging file a write goes through before the rename.
pub(crate) const TMP_SUFFIX: &str = "tmp";

/// `records.json` stages as `records.json.tmp`.
pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn is_staging_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(TMP_SUFFIX)
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("files/records.json")),
            PathBuf::from("files/records.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("files/notes")), PathBuf::from("files/notes.tmp"));
    }

    #[test]
    fn staging_files_are_recognized_by_extension() {
        assert!(is_staging_file(Path::new("files/records.json.tmp")));
        assert!(is_staging_file(Path::new("files/january.tmp")));
        assert!(!is_staging_file(Path::new("files/records.json")));
        assert!(!is_staging_file(Path::new("files/tmp")));
    }
}
