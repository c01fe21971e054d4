//! Read-only description of the failure that triggered a report.

use std::any::Any;
use std::backtrace::BacktraceStatus;
use std::error::Error;

use serde::{Deserialize, Serialize};

/// The triggering exception, shared read-only with every collector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionInfo {
    pub type_name: String,
    pub message: String,
    /// Source chain below the top-level error, outermost first
    pub causes: Vec<String>,
    pub backtrace: Option<String>,
}

impl ExceptionInfo {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            causes: Vec::new(),
            backtrace: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    pub fn with_backtrace(mut self, backtrace: impl Into<String>) -> Self {
        self.backtrace = Some(backtrace.into());
        self
    }

    /// Describe a concrete error type and its `source()` chain
    pub fn from_error<E: Error + 'static>(error: &E) -> Self {
        let mut info = Self::new(std::any::type_name::<E>(), error.to_string());
        let mut source = error.source();
        while let Some(cause) = source {
            info.causes.push(cause.to_string());
            source = cause.source();
        }
        info
    }

    /// Describe an `anyhow::Error`, including its backtrace when one was captured
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        let mut chain = error.chain();
        let message = chain
            .next()
            .map(|e| e.to_string())
            .unwrap_or_default();

        let mut info = Self::new("anyhow::Error", message);
        info.causes = chain.map(|e| e.to_string()).collect();

        let backtrace = error.backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            info.backtrace = Some(backtrace.to_string());
        }
        info
    }

    /// Describe a panic payload caught by `catch_unwind`
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };
        Self::new("panic", message)
    }
}
