//! # Storage Layer
//!
//! The [`CollectionStore`] trait persists a whole [`BandCollection`] as one unit.
//! There are no partial writes: `save` replaces the stored document entirely.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, one JSON file, written atomically
//!   (temp file + rename).
//! - [`memory::MemoryStore`]: keeps the serialized document in memory. It goes
//!   through the exact same encode/decode path, so tests exercise the format and
//!   the load-time validation without touching the filesystem.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "init_date": "2024-03-01",
//!   "bands": [
//!     { "id": 1, "name": "Wire", "coordinates": { "x": 3, "y": -1.5 }, ... }
//!   ]
//! }
//! ```
//!
//! A missing document is not an error (`load` returns `Ok(None)`); a document
//! that does not parse, or whose records fail validation, is reported as
//! [`BandzError::Database`] so callers can tell "absent" from "corrupt".

use crate::collection::BandCollection;
use crate::error::{BandzError, Result};
use crate::model::Band;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait CollectionStore {
    /// Load the stored collection, or `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<BandCollection>>;

    /// Replace the stored collection.
    fn save(&mut self, collection: &BandCollection) -> Result<()>;

    /// Where the collection lives. Virtual for non-file stores.
    fn location(&self) -> PathBuf;
}

#[derive(Serialize)]
struct StoredCollectionRef<'a> {
    init_date: NaiveDate,
    bands: Vec<&'a Band>,
}

#[derive(Deserialize)]
struct StoredCollection {
    init_date: NaiveDate,
    #[serde(default)]
    bands: Vec<Band>,
}

pub(crate) fn encode(collection: &BandCollection, pretty: bool) -> Result<String> {
    let doc = StoredCollectionRef {
        init_date: collection.init_date(),
        bands: collection.iter().collect(),
    };
    let text = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(text)
}

pub(crate) fn decode(text: &str, origin: &str) -> Result<BandCollection> {
    let corrupt = |reason: String| {
        BandzError::database(format!(
            "File is corrupt or has an invalid format: {}: {}",
            origin, reason
        ))
    };

    let doc: StoredCollection = serde_json::from_str(text).map_err(|e| corrupt(e.to_string()))?;
    BandCollection::from_parts(doc.init_date, doc.bands).map_err(|e| corrupt(e.to_string()))
}
