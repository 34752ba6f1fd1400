use thiserror::Error;
use tracing::debug;

use crate::pipeline::{self, Query, ViewResult};
use crate::record::Entity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("a {kind} record with id '{id}' already exists")]
    DuplicateId { kind: &'static str, id: String },

    #[error("no {kind} record with id '{id}'")]
    NotFound { kind: &'static str, id: String },
}

/// Owns one page's record collection. Mutations replace records wholesale;
/// views borrow the current contents.
///
/// The store keeps no query or current page. A caller that deletes the last
/// record on the last page can keep passing its old page number: [`view`]
/// clamps it.
///
/// [`view`]: RecordStore::view
#[derive(Clone, Debug, Default)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T: Entity> RecordStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: T::KIND.as_str(),
                id: id.to_string(),
            })
    }

    pub fn insert(&mut self, record: T) -> Result<(), StoreError> {
        if self.get(record.id()).is_some() {
            return Err(StoreError::DuplicateId {
                kind: T::KIND.as_str(),
                id: record.id().to_string(),
            });
        }
        debug!(kind = T::KIND.as_str(), id = record.id(), "inserting record");
        self.records.push(record);
        Ok(())
    }

    /// Replaces the record sharing `record`'s id, keeping its position.
    pub fn replace(&mut self, record: T) -> Result<T, StoreError> {
        let idx = self.position(record.id())?;
        debug!(kind = T::KIND.as_str(), id = record.id(), "replacing record");
        Ok(std::mem::replace(&mut self.records[idx], record))
    }

    pub fn remove(&mut self, id: &str) -> Result<T, StoreError> {
        let idx = self.position(id)?;
        debug!(kind = T::KIND.as_str(), id, "removing record");
        Ok(self.records.remove(idx))
    }

    pub fn view(&self, query: &Query) -> ViewResult<'_, T> {
        pipeline::view(&self.records, query)
    }
}

impl<T: Entity> From<Vec<T>> for RecordStore<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}
