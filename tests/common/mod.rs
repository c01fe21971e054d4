//! Shared fakes for the integration tests.

#![allow(dead_code)]

use anyhow::{bail, Result};

use crash_collector::collectors::Collector;
use crash_collector::exception::ExceptionInfo;
use crash_collector::report::{ObjectScope, StructuredWriter};

/// Writer that records the begin/end sequence it receives
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<String>,
    stack: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `begin:x` is closed by a matching `end:x`, properly nested
    pub fn is_balanced(&self) -> bool {
        let mut open = Vec::new();
        for event in &self.events {
            if let Some(name) = event.strip_prefix("begin:") {
                open.push(name);
            } else if let Some(name) = event.strip_prefix("end:") {
                if open.pop() != Some(name) {
                    return false;
                }
            }
        }
        open.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl StructuredWriter for EventLog {
    fn begin_object(&mut self, name: &str) {
        self.events.push(format!("begin:{}", name));
        self.stack.push(name.to_string());
    }

    fn write_value(&mut self, key: &str, value: &str) {
        self.events.push(format!("value:{}={}", key, value));
    }

    fn end_object(&mut self, name: &str) {
        self.events.push(format!("end:{}", name));
        self.stack.pop();
    }
}

/// How a scripted collector behaves when processed
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Write this many fields and succeed
    Succeed(usize),
    /// Write this many fields, then return an error
    Fail(usize),
    /// Open a nested scope and panic inside it
    Panic,
    /// Open this many scopes without closing them
    Leak(usize),
    /// Close its own section, then call `end_object` this many more times
    OverClose(usize),
}

pub struct ScriptedCollector {
    name: String,
    behavior: Behavior,
}

impl ScriptedCollector {
    pub fn new(name: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            name: name.into(),
            behavior,
        }
    }
}

impl Collector for ScriptedCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        match self.behavior {
            Behavior::Succeed(fields) => {
                let mut scope = ObjectScope::open(writer, &self.name);
                for i in 0..fields {
                    scope.write_value(&format!("field{}", i), "value");
                }
                Ok(())
            }
            Behavior::Fail(fields) => {
                let mut scope = ObjectScope::open(writer, &self.name);
                for i in 0..fields {
                    scope.write_value(&format!("field{}", i), "value");
                }
                bail!("{} failed", self.name);
            }
            Behavior::Panic => {
                let mut scope = ObjectScope::open(writer, &self.name);
                let _nested = scope.object("nested");
                panic!("{} panicked", self.name);
            }
            Behavior::Leak(depth) => {
                writer.begin_object(&self.name);
                for level in 1..depth {
                    writer.begin_object(&format!("level{}", level));
                }
                Ok(())
            }
            Behavior::OverClose(extra) => {
                writer.begin_object(&self.name);
                for _ in 0..=extra {
                    writer.end_object(&self.name);
                }
                Ok(())
            }
        }
    }
}

pub fn exception() -> ExceptionInfo {
    ExceptionInfo::new("std::io::Error", "disk full").with_cause("write failed")
}
