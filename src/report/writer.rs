use std::fmt::Display;

use anyhow::Result;
use log::debug;

use crate::constants::{BOOL_FALSE, BOOL_TRUE};

/// Sink that collectors write their sections into.
///
/// Writers build a tree of named objects. `begin_object` pushes a scope,
/// `write_value` adds a leaf to the innermost open scope and `end_object`
/// pops it. Implementations never fail; any malformed call sequence is
/// tolerated and resolved deterministically by the implementation.
///
/// The three primitives are the whole contract. Scope bookkeeping for a
/// collection pass is done by the registry, not the backend.
///
/// Collectors should not call `begin_object`/`end_object` directly. Use
/// [`ObjectScope`](super::ObjectScope), which closes the scope on every exit
/// path.
pub trait StructuredWriter {
    /// Open a named object under the current scope
    fn begin_object(&mut self, name: &str);

    /// Write a text leaf into the current scope
    fn write_value(&mut self, key: &str, value: &str);

    /// Close the current scope
    fn end_object(&mut self, name: &str);

    /// Write a value if present. Absent values omit the key entirely.
    fn write_optional(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.write_value(key, value);
        }
    }

    /// Write a boolean as canonical `True`/`False` text
    fn write_bool(&mut self, key: &str, value: bool) {
        self.write_value(key, if value { BOOL_TRUE } else { BOOL_FALSE });
    }
}

/// Outcome of gathering a single fact.
///
/// Field-level failures never abort a collector: the field is simply
/// omitted from its section.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome<T> {
    Value(T),
    Omitted,
}

impl<T> FieldOutcome<T> {
    /// Convert a lookup result, logging the reason when the field is dropped
    pub fn from_result(key: &str, result: Result<T>) -> Self {
        match result {
            Ok(value) => FieldOutcome::Value(value),
            Err(e) => {
                debug!("Omitting field '{}': {:#}", key, e);
                FieldOutcome::Omitted
            }
        }
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, FieldOutcome::Omitted)
    }

    pub fn value(self) -> Option<T> {
        match self {
            FieldOutcome::Value(value) => Some(value),
            FieldOutcome::Omitted => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldOutcome<U> {
        match self {
            FieldOutcome::Value(value) => FieldOutcome::Value(f(value)),
            FieldOutcome::Omitted => FieldOutcome::Omitted,
        }
    }
}

impl<T> From<Option<T>> for FieldOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldOutcome::Value(value),
            None => FieldOutcome::Omitted,
        }
    }
}

/// Format a fact as report text. `Display` output is locale independent.
pub(crate) fn to_text<T: Display>(value: &T) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_field_outcome_from_ok() {
        let field = FieldOutcome::from_result("width", Ok(1920));
        assert_eq!(field, FieldOutcome::Value(1920));
        assert!(!field.is_omitted());
    }

    #[test]
    fn test_field_outcome_from_err() {
        let field: FieldOutcome<u32> =
            FieldOutcome::from_result("fileVersion", Err(anyhow!("no such file")));
        assert!(field.is_omitted());
        assert_eq!(field.value(), None);
    }

    #[test]
    fn test_field_outcome_map_and_option() {
        let field: FieldOutcome<u32> = Some(96).into();
        assert_eq!(field.map(|v| v * 2), FieldOutcome::Value(192));

        let missing: FieldOutcome<u32> = None.into();
        assert_eq!(missing.map(|v| v * 2), FieldOutcome::Omitted);
    }

    #[test]
    fn test_to_text_is_invariant() {
        assert_eq!(to_text(&96.0f32), "96");
        assert_eq!(to_text(&120.5f32), "120.5");
        assert_eq!(to_text(&1_048_576u64), "1048576");
    }
}
