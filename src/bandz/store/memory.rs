use super::{decode, encode, CollectionStore};
use crate::collection::BandCollection;
use crate::error::Result;
use std::path::PathBuf;

const LOCATION: &str = "memory://bands.json";

/// Holds the serialized document in memory instead of on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already "contains" `document`, valid or not.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }
}

impl CollectionStore for MemoryStore {
    fn load(&self) -> Result<Option<BandCollection>> {
        match &self.document {
            None => Ok(None),
            Some(text) => decode(text, LOCATION).map(Some),
        }
    }

    fn save(&mut self, collection: &BandCollection) -> Result<()> {
        self.document = Some(encode(collection, false)?);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(LOCATION)
    }
}
