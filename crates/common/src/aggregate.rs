//! Endpoint aggregation
//!
//! Both extractors feed records into a single [`Aggregate`] so that base path
//! classification and counting cannot diverge between document families.

use crate::base_path::classify_base_path;
use crate::EndpointRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered occurrence counter
///
/// Keys iterate in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram {
    counts: IndexMap<String, usize>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, inserting it at the end if unseen
    pub fn increment(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn sum(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Endpoint totals and histograms built from one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Number of endpoints counted
    pub total: usize,

    /// Method -> count
    pub methods: Histogram,

    /// Normalized path -> count
    pub endpoints: Histogram,

    /// Base path -> count
    pub bases: Histogram,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one endpoint
    ///
    /// `path` must already be normalized; its base path is derived here.
    pub fn add_record(&mut self, method: &str, path: &str) {
        let base = classify_base_path(path);

        self.total += 1;
        self.methods.increment(method);
        self.endpoints.increment(path);
        self.bases.increment(&base);
    }

    /// Count an [`EndpointRecord`]
    pub fn add(&mut self, record: &EndpointRecord) {
        self.add_record(&record.method, &record.path);
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Extend<EndpointRecord> for Aggregate {
    fn extend<T: IntoIterator<Item = EndpointRecord>>(&mut self, iter: T) {
        for record in iter {
            self.add(&record);
        }
    }
}

impl FromIterator<EndpointRecord> for Aggregate {
    fn from_iter<T: IntoIterator<Item = EndpointRecord>>(iter: T) -> Self {
        let mut aggregate = Aggregate::new();
        aggregate.extend(iter);
        aggregate
    }
}
