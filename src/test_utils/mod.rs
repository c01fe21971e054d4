//! Test utilities for crash_collector
//!
//! This module provides writers and collectors with scripted behavior for
//! use across the unit test modules.

#![cfg(test)]

use anyhow::{bail, Result};

use crate::collectors::Collector;
use crate::exception::ExceptionInfo;
use crate::report::{ObjectScope, StructuredWriter};

/// One call made against a [`RecordingWriter`]
#[derive(Debug, Clone, PartialEq)]
pub enum WriterEvent {
    Begin(String),
    Value(String, String),
    End(String),
}

/// Writer that records every call in order
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub events: Vec<WriterEvent>,
    stack: Vec<String>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every begin has a matching end with the same name, properly nested
    pub fn is_balanced(&self) -> bool {
        let mut open = Vec::new();
        for event in &self.events {
            match event {
                WriterEvent::Begin(name) => open.push(name),
                WriterEvent::End(name) => {
                    if open.pop() != Some(name) {
                        return false;
                    }
                }
                WriterEvent::Value(..) => {}
            }
        }
        open.is_empty()
    }

    /// Last value written under `key` in any scope
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            WriterEvent::Value(k, v) if k == key => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn begun(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                WriterEvent::Begin(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl StructuredWriter for RecordingWriter {
    fn begin_object(&mut self, name: &str) {
        self.events.push(WriterEvent::Begin(name.to_string()));
        self.stack.push(name.to_string());
    }

    fn write_value(&mut self, key: &str, value: &str) {
        self.events
            .push(WriterEvent::Value(key.to_string(), value.to_string()));
    }

    fn end_object(&mut self, name: &str) {
        self.events.push(WriterEvent::End(name.to_string()));
        self.stack.pop();
    }
}

/// Writes a fixed set of fields into a section named after itself
pub struct StaticCollector {
    name: String,
    fields: Vec<(String, String)>,
}

impl StaticCollector {
    pub fn new(name: &str, fields: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Collector for StaticCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        let mut scope = ObjectScope::open(writer, &self.name);
        for (key, value) in &self.fields {
            scope.write_value(key, value);
        }
        Ok(())
    }
}

/// Opens its section, writes one field, then fails
pub struct FailingCollector {
    name: String,
}

impl FailingCollector {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Collector for FailingCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        let mut scope = ObjectScope::open(writer, &self.name);
        scope.write_value("partial", "True");
        bail!("collector failed on purpose");
    }
}

/// Opens a nested scope and panics inside it
pub struct PanickingCollector {
    name: String,
}

impl PanickingCollector {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Collector for PanickingCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        let mut scope = ObjectScope::open(writer, &self.name);
        let _inner = scope.object("inner");
        panic!("collector panicked on purpose");
    }
}

/// Calls `begin_object` directly and never closes what it opened
pub struct LeakyCollector {
    name: String,
    depth: usize,
}

impl LeakyCollector {
    pub fn new(name: &str, depth: usize) -> Self {
        Self {
            name: name.to_string(),
            depth,
        }
    }
}

impl Collector for LeakyCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        writer.begin_object(&self.name);
        for level in 1..self.depth {
            writer.begin_object(&format!("level{}", level));
        }
        writer.write_value("leaked", "True");
        Ok(())
    }
}

/// Closes its own section, then calls `end_object` `extra` more times
pub struct OverClosingCollector {
    name: String,
    extra: usize,
}

impl OverClosingCollector {
    pub fn new(name: &str, extra: usize) -> Self {
        Self {
            name: name.to_string(),
            extra,
        }
    }
}

impl Collector for OverClosingCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        writer.begin_object(&self.name);
        for _ in 0..=self.extra {
            writer.end_object(&self.name);
        }
        Ok(())
    }
}
