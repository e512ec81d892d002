use super::{decode, encode, CollectionStore};
use crate::collection::BandCollection;
use crate::error::{BandzError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores the collection as a single JSON document at `path`.
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// The path is made absolute up front so messages and `info` show where
    /// the data really lives.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        Self { path, pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self) -> Result<Option<BandCollection>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(BandzError::database(format!(
                    "Cannot read file: {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "read collection file");
        decode(&text, &self.path.display().to_string()).map(Some)
    }

    fn save(&mut self, collection: &BandCollection) -> Result<()> {
        if let Ok(meta) = fs::metadata(&self.path) {
            if meta.permissions().readonly() {
                return Err(BandzError::database(format!(
                    "File is not writable: {}",
                    self.path.display()
                )));
            }
        }

        let content = encode(collection, self.pretty)?;

        // Atomic write: a crash mid-save leaves the previous file intact.
        let tmp_path = self
            .parent_dir()
            .join(format!(".bandz-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(|e| {
            BandzError::database(format!(
                "Cannot create file: {}: {}",
                self.path.display(),
                e
            ))
        })?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BandzError::database(format!(
                "Cannot write file: {}: {}",
                self.path.display(),
                e
            )));
        }

        tracing::debug!(path = %self.path.display(), bands = collection.len(), "saved collection");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{band, date};

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bands.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bands.json");
        let mut store = JsonFileStore::new(&path);

        let mut collection = BandCollection::with_init_date(date(2022, 2, 2));
        collection.add(band("Wire", 4, date(1976, 10, 1))).unwrap();
        store.save(&collection).unwrap();

        let loaded = JsonFileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(loaded.init_date(), date(2022, 2, 2));
        assert_eq!(loaded.len(), 1);

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn corrupt_file_is_distinguished_from_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bands.json");
        fs::write(&path, "<collection/>").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, BandzError::Database(_)));
        assert!(err.to_string().contains("corrupt"));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nope").join("bands.json"));
        let err = store.save(&BandCollection::new()).unwrap_err();
        assert!(matches!(err, BandzError::Database(_)));
    }

    #[test]
    fn read_only_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bands.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&BandCollection::new()).unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        let err = store.save(&BandCollection::new()).unwrap_err();
        assert!(err.to_string().contains("not writable"));
    }
}
