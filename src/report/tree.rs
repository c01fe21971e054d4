use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::{trace, warn};
use serde::Serialize;
use uuid::Uuid;

use crate::report::writer::StructuredWriter;

/// One value in a report object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Value(String),
    Object(ReportObject),
}

/// Ordered mapping from key to text value or nested object
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReportObject {
    entries: IndexMap<String, Entry>,
}

impl ReportObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Text value stored under `key`
    pub fn value(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Entry::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Nested object stored under `key`
    pub fn object(&self, key: &str) -> Option<&ReportObject> {
        match self.entries.get(key) {
            Some(Entry::Object(object)) => Some(object),
            _ => None,
        }
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Existing keys keep their position; the value is replaced in place.
    fn insert_value(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), Entry::Value(value.to_string()));
    }

    /// Get or create the child object `name`. A text value under the same
    /// key is replaced by an empty object.
    fn child_object_mut(&mut self, name: &str) -> &mut ReportObject {
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| Entry::Object(ReportObject::default()));

        if let Entry::Value(_) = entry {
            *entry = Entry::Object(ReportObject::default());
        }

        match entry {
            Entry::Object(object) => object,
            Entry::Value(_) => unreachable!("value entries are replaced above"),
        }
    }
}

/// Finished report for one exception event
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub report_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub sections: ReportObject,
}

impl Report {
    pub fn section(&self, name: &str) -> Option<&ReportObject> {
        self.sections.object(name)
    }

    /// Section names in the order collectors produced them
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.keys().collect()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")
    }
}

/// In-memory [`StructuredWriter`] that accumulates a [`ReportObject`] tree.
///
/// Duplicate handling:
/// - `begin_object` with an existing child name re-enters that object
/// - `write_value` with an existing key overwrites it in place
/// - an object replaces a text value with the same key
///
/// Unbalanced `end_object` calls are tolerated and logged.
#[derive(Debug, Default)]
pub struct TreeWriter {
    root: ReportObject,
    stack: Vec<String>,
}

impl TreeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &ReportObject {
        &self.root
    }

    /// Number of scopes currently open
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn current_mut(&mut self) -> &mut ReportObject {
        let mut node = &mut self.root;
        for name in &self.stack {
            node = node.child_object_mut(name);
        }
        node
    }

    /// Close any scopes still open and hand over the finished report
    pub fn into_report(mut self) -> Report {
        if !self.stack.is_empty() {
            warn!(
                "Report finalized with {} open scope(s): {}",
                self.stack.len(),
                self.stack.join(" > ")
            );
            self.stack.clear();
        }

        Report {
            report_id: Uuid::new_v4(),
            created_at: Utc::now(),
            sections: self.root,
        }
    }
}

impl StructuredWriter for TreeWriter {
    fn begin_object(&mut self, name: &str) {
        trace!("begin_object({})", name);
        self.current_mut().child_object_mut(name);
        self.stack.push(name.to_string());
    }

    fn write_value(&mut self, key: &str, value: &str) {
        self.current_mut().insert_value(key, value);
    }

    fn end_object(&mut self, name: &str) {
        match self.stack.pop() {
            Some(open) if open == name => trace!("end_object({})", name),
            Some(open) => warn!(
                "end_object('{}') does not match open scope '{}'; closing '{}'",
                name, open, open
            ),
            None => warn!("end_object('{}') called with no open scope", name),
        }
    }
}
