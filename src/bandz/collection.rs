//! # Band Collection
//!
//! An always-sorted sequence of [`Band`]s with unique ids. The collection owns
//! the id counter: it starts at 1 and, when records come back from storage, is
//! moved past the largest id seen so new bands never collide with old ones.
//! Once `u32::MAX` has been handed out the counter is spent and `add` fails.
//!
//! Every structural mutation re-sorts by [`Band::cmp_order`], so iteration
//! order is always the total order, never insertion order.

use crate::error::{BandzError, Result};
use crate::model::Band;
use chrono::{Local, NaiveDate};
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct BandCollection {
    bands: Vec<Band>,
    init_date: NaiveDate,
    next_id: Option<u32>,
}

impl Default for BandCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl BandCollection {
    pub fn new() -> Self {
        Self::with_init_date(Local::now().date_naive())
    }

    pub fn with_init_date(init_date: NaiveDate) -> Self {
        Self {
            bands: Vec::new(),
            init_date,
            next_id: Some(1),
        }
    }

    /// Rebuilds a collection from stored records, re-validating each one.
    pub fn from_parts(init_date: NaiveDate, bands: Vec<Band>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(bands.len());
        for band in &bands {
            band.validate()?;
            // validate() guarantees the id is present
            let id = band.id().unwrap_or_default();
            if !seen.insert(id) {
                return Err(BandzError::value(format!("Duplicate band id: {}", id)));
            }
        }

        let next_id = seen.iter().max().map_or(Some(1), |max| max.checked_add(1));
        let mut collection = Self {
            bands,
            init_date,
            next_id,
        };
        collection.sort();
        Ok(collection)
    }

    pub fn init_date(&self) -> NaiveDate {
        self.init_date
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Band> {
        self.bands.iter()
    }

    /// The id the next added band will receive, `None` once ids run out.
    pub fn next_id(&self) -> Option<u32> {
        self.next_id
    }

    /// Assigns the next id and inserts the band in order.
    pub fn add(&mut self, mut band: Band) -> Result<u32> {
        let id = self
            .next_id
            .ok_or_else(|| BandzError::database("No free band id left in the collection"))?;
        band.assign_id(id)?;
        self.next_id = id.checked_add(1);
        self.bands.push(band);
        self.sort();
        Ok(id)
    }

    /// Adds the band only if it is strictly greater than the current maximum.
    /// An empty collection has no maximum, so the band is always added.
    pub fn add_if_max(&mut self, band: Band) -> Result<Option<u32>> {
        let is_greater = match self.max() {
            None => true,
            Some(max) => band.cmp_order(max) == Ordering::Greater,
        };
        if is_greater {
            self.add(band).map(Some)
        } else {
            Ok(None)
        }
    }

    /// The greatest band by the total order.
    pub fn max(&self) -> Option<&Band> {
        self.bands.iter().max_by(|a, b| a.cmp_order(b))
    }

    pub fn find(&self, id: u32) -> Option<&Band> {
        self.bands.iter().find(|b| b.id() == Some(id))
    }

    /// Replaces the editable fields of band `id` with those of `band`.
    pub fn update(&mut self, id: u32, band: Band) -> bool {
        let Some(existing) = self.bands.iter_mut().find(|b| b.id() == Some(id)) else {
            return false;
        };
        existing.replace_fields(band);
        self.sort();
        true
    }

    pub fn remove_by_id(&mut self, id: u32) -> bool {
        let before = self.bands.len();
        self.bands.retain(|b| b.id() != Some(id));
        self.bands.len() != before
    }

    /// Removes every band strictly greater than `pivot` by the total order.
    /// Bands equal in order to `pivot` are kept even if they differ otherwise.
    pub fn remove_greater(&mut self, pivot: &Band) -> usize {
        let before = self.bands.len();
        self.bands.retain(|b| b.cmp_order(pivot) != Ordering::Greater);
        before - self.bands.len()
    }

    pub fn clear(&mut self) {
        self.bands.clear();
    }

    pub fn sum_participants(&self) -> i64 {
        self.bands
            .iter()
            .fold(0i64, |acc, b| acc.saturating_add(b.number_of_participants()))
    }

    pub fn average_participants(&self) -> i64 {
        if self.bands.is_empty() {
            return 0;
        }
        self.sum_participants() / self.bands.len() as i64
    }

    /// Establishment dates, most recent first. Computed afresh on every call.
    pub fn establishment_dates_descending(&self) -> impl Iterator<Item = NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .bands
            .iter()
            .map(Band::establishment_date)
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.into_iter()
    }

    fn sort(&mut self) {
        self.bands.sort_by(Band::cmp_order);
    }
}

impl<'a> IntoIterator for &'a BandCollection {
    type Item = &'a Band;
    type IntoIter = std::slice::Iter<'a, Band>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}
