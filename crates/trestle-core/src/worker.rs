//! Worker registry: the configured build workers.
//!
//! Workers arrive as a single delimited string (`name:credential` pairs
//! separated by commas) and are parsed into an ordered, immutable
//! registry. Parsing is all-or-nothing: one malformed entry rejects the
//! whole list.

use crate::error::{Error, Result};
use crate::platform::PlatformTag;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single build worker, identified by name and connection credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WorkerSpec {
    pub name: String,
    pub credential: String,
}

impl WorkerSpec {
    pub fn new(name: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credential: credential.into(),
        }
    }
}

impl fmt::Display for WorkerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.credential)
    }
}

/// Ordered collection of workers. Insertion order is preserved; it
/// determines builder ordering downstream but never correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct WorkerRegistry {
    workers: Vec<WorkerSpec>,
}

impl WorkerRegistry {
    /// Parse a `name1:credential1,name2:credential2,...` list.
    ///
    /// Fails with [`Error::MalformedWorkerSpec`] when any entry does not
    /// split into exactly two colon-delimited fields. There is no
    /// partial registry: the first bad entry rejects the whole input.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut workers = Vec::new();
        for entry in raw.split(',') {
            let fields: Vec<&str> = entry.split(':').collect();
            let [name, credential] = fields.as_slice() else {
                return Err(Error::MalformedWorkerSpec {
                    entry: entry.to_string(),
                });
            };
            workers.push(WorkerSpec::new(*name, *credential));
        }
        Ok(Self { workers })
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkerSpec> {
        self.workers.iter()
    }

    /// Workers eligible for a platform, in registry order.
    ///
    /// Eligibility is substring containment of the platform tag in the
    /// worker name; a worker may be eligible for zero or several
    /// platforms.
    pub fn matching(&self, platform: PlatformTag) -> impl Iterator<Item = &WorkerSpec> {
        self.workers
            .iter()
            .filter(move |w| platform.matches(&w.name))
    }
}

impl fmt::Display for WorkerRegistry {
    /// Re-serializes in the input format, so `parse` round-trips.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.workers.iter().map(WorkerSpec::to_string).collect();
        write!(f, "{}", entries.join(","))
    }
}

impl<'a> IntoIterator for &'a WorkerRegistry {
    type Item = &'a WorkerSpec;
    type IntoIter = std::slice::Iter<'a, WorkerSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.workers.iter()
    }
}
