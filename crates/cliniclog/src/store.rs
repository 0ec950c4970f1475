//! In-memory record store for cliniclog.
//!
//! The store is a fixed number of slots, each either empty or holding one
//! [`VisitRecord`]. Records go into the first empty slot, so slot order is
//! insertion order except where a deleted slot has been reused.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::VisitRecord;

/// Number of slots a store gets when none is configured.
pub const DEFAULT_CAPACITY: usize = 50;

/// Fixed-capacity table of visit records.
///
/// Provides:
/// - Create into the first free slot
/// - Search and list in slot order
/// - Update and delete of the first slot matching an SR-Code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    slots: Vec<Option<VisitRecord>>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RecordStore {
    /// Create an empty store with `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        debug!("Creating record store with {} slots", capacity);
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Check if every slot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Store a record in the first empty slot.
    ///
    /// Returns the index of the slot used.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the record is rejected, or
    /// [`Error::Full`] if there is no empty slot. The store is unchanged in
    /// both cases.
    pub fn create(&mut self, record: VisitRecord) -> Result<usize> {
        record.validate()?;

        let capacity = self.capacity();
        let Some(index) = self.slots.iter().position(Option::is_none) else {
            info!("Rejected record {}: all {} slots in use", record.code, capacity);
            return Err(Error::Full { capacity });
        };

        debug!("Created record {} in slot {}", record.code, index);
        self.slots[index] = Some(record);
        Ok(index)
    }

    /// Every record whose SR-Code equals `code`, in slot order.
    ///
    /// An empty result means no record matched.
    #[must_use]
    pub fn search(&self, code: &str) -> Vec<&VisitRecord> {
        self.occupied().filter(|record| record.code == code).collect()
    }

    /// Every stored record, in slot order.
    #[must_use]
    pub fn list(&self) -> Vec<&VisitRecord> {
        self.occupied().collect()
    }

    /// Index of the first slot whose SR-Code equals `code`.
    #[must_use]
    pub fn position(&self, code: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|record| record.code == code))
    }

    /// Check if any record carries `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Get the record in a slot, if the slot is occupied.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&VisitRecord> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Clear the first slot whose SR-Code equals `code`.
    ///
    /// Later duplicates are left in place. Returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record carries `code`.
    pub fn delete(&mut self, code: &str) -> Result<VisitRecord> {
        let index = self.position(code).ok_or_else(|| Error::not_found(code))?;
        let removed = self.slots[index]
            .take()
            .ok_or_else(|| Error::not_found(code))?;

        debug!("Deleted record {} from slot {}", code, index);
        Ok(removed)
    }

    /// Overwrite the first record whose SR-Code equals `code`.
    ///
    /// All seven fields are replaced, including the SR-Code itself, so an
    /// update may re-key a record. Returns the index of the slot written.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `record` is rejected, or
    /// [`Error::NotFound`] if no record carries `code`. The store is
    /// unchanged in both cases.
    pub fn update(&mut self, code: &str, record: VisitRecord) -> Result<usize> {
        record.validate()?;

        let index = self.position(code).ok_or_else(|| Error::not_found(code))?;
        if record.code != code {
            debug!("Record in slot {} re-keyed from {} to {}", index, code, record.code);
        }
        debug!("Updated record in slot {}", index);
        self.slots[index] = Some(record);
        Ok(index)
    }

    fn occupied(&self) -> impl Iterator<Item = &VisitRecord> {
        self.slots.iter().filter_map(Option::as_ref)
    }
}
