use std::fmt::Display;

use crate::report::writer::{to_text, FieldOutcome, StructuredWriter};

/// Guard for one open object in a [`StructuredWriter`].
///
/// Opening the guard calls `begin_object`; dropping it calls `end_object`
/// with the same name. Because `Drop` also runs during unwinding and on `?`
/// early returns, the tree stays balanced however the collector exits.
pub struct ObjectScope<'w> {
    writer: &'w mut dyn StructuredWriter,
    name: String,
}

impl<'w> ObjectScope<'w> {
    pub fn open(writer: &'w mut dyn StructuredWriter, name: &str) -> Self {
        writer.begin_object(name);
        Self {
            writer,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Open a nested object inside this one
    pub fn object(&mut self, name: &str) -> ObjectScope<'_> {
        ObjectScope::open(&mut *self.writer, name)
    }

    pub fn write_value(&mut self, key: &str, value: &str) {
        self.writer.write_value(key, value);
    }

    pub fn write_optional(&mut self, key: &str, value: Option<&str>) {
        self.writer.write_optional(key, value);
    }

    pub fn write_bool(&mut self, key: &str, value: bool) {
        self.writer.write_bool(key, value);
    }

    pub fn write_display<T: Display>(&mut self, key: &str, value: T) {
        self.writer.write_value(key, &to_text(&value));
    }

    /// Write a gathered fact, skipping the key if it was omitted
    pub fn write_field<T: Display>(&mut self, key: &str, field: FieldOutcome<T>) {
        if let FieldOutcome::Value(value) = field {
            self.write_display(key, value);
        }
    }
}

impl Drop for ObjectScope<'_> {
    fn drop(&mut self) {
        self.writer.end_object(&self.name);
    }
}
