//! # Database Facade
//!
//! [`Database`] ties the in-memory [`BandCollection`] to a [`CollectionStore`].
//! It is the only thing commands talk to: they never see the store directly.
//!
//! Opening a database whose store is empty creates a fresh collection and
//! persists it right away, so the backing file exists from the first run.

use crate::collection::BandCollection;
use crate::error::Result;
use crate::model::Band;
use crate::store::CollectionStore;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Summary printed by `info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionInfo {
    pub location: PathBuf,
    pub init_date: NaiveDate,
    pub collection_type: &'static str,
    pub element_type: &'static str,
    pub size: usize,
}

pub struct Database {
    store: Box<dyn CollectionStore>,
    collection: BandCollection,
}

impl Database {
    pub fn open(mut store: Box<dyn CollectionStore>) -> Result<Self> {
        let collection = match store.load()? {
            Some(collection) => {
                tracing::info!(
                    location = %store.location().display(),
                    bands = collection.len(),
                    "loaded collection"
                );
                collection
            }
            None => {
                let collection = BandCollection::new();
                store.save(&collection)?;
                tracing::info!(location = %store.location().display(), "created empty collection");
                collection
            }
        };
        Ok(Self { store, collection })
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.collection)
    }

    pub fn collection(&self) -> &BandCollection {
        &self.collection
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }

    pub fn info(&self) -> CollectionInfo {
        CollectionInfo {
            location: self.store.location(),
            init_date: self.collection.init_date(),
            collection_type: "BandCollection",
            element_type: "Band",
            size: self.collection.len(),
        }
    }

    pub fn add(&mut self, band: Band) -> Result<u32> {
        self.collection.add(band)
    }

    pub fn add_if_max(&mut self, band: Band) -> Result<Option<u32>> {
        self.collection.add_if_max(band)
    }

    pub fn find(&self, id: u32) -> Option<&Band> {
        self.collection.find(id)
    }

    pub fn update(&mut self, id: u32, band: Band) -> bool {
        self.collection.update(id, band)
    }

    pub fn remove_by_id(&mut self, id: u32) -> bool {
        self.collection.remove_by_id(id)
    }

    pub fn remove_greater(&mut self, pivot: &Band) -> usize {
        self.collection.remove_greater(pivot)
    }

    pub fn clear(&mut self) {
        self.collection.clear();
    }
}
