use anyhow::Result;

use crate::collectors::collector::Collector;
use crate::constants::{
    FIELD_MESSAGE, FIELD_STACK_TRACE, FIELD_TYPE, INNER_EXCEPTION, SECTION_EXCEPTION,
};
use crate::exception::ExceptionInfo;
use crate::report::{ObjectScope, StructuredWriter};

/// Writes the triggering exception and its cause chain.
///
/// Each cause becomes an `innerException` object nested inside the
/// previous one.
#[derive(Debug, Default)]
pub struct ExceptionCollector;

impl ExceptionCollector {
    pub fn new() -> Self {
        Self
    }
}

fn write_causes(scope: &mut ObjectScope<'_>, causes: &[String]) {
    if let Some((cause, rest)) = causes.split_first() {
        let mut inner = scope.object(INNER_EXCEPTION);
        inner.write_value(FIELD_MESSAGE, cause);
        write_causes(&mut inner, rest);
    }
}

impl Collector for ExceptionCollector {
    fn name(&self) -> &str {
        SECTION_EXCEPTION
    }

    fn process(&self, exception: &ExceptionInfo, writer: &mut dyn StructuredWriter) -> Result<()> {
        let mut scope = ObjectScope::open(writer, SECTION_EXCEPTION);
        scope.write_value(FIELD_TYPE, &exception.type_name);
        scope.write_value(FIELD_MESSAGE, &exception.message);
        scope.write_optional(FIELD_STACK_TRACE, exception.backtrace.as_deref());
        write_causes(&mut scope, &exception.causes);
        Ok(())
    }
}
