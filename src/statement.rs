use crate::{OrderedBinder, Result, Value, count_placeholders, write_literal};
use std::fmt::{self, Display, Formatter};

/// An immutable SQL statement whose text carries only `?` placeholders, in
/// the exact order of its parameter sequence.
///
/// Instances come out of a binder's resolve step (or [`ParameterizedStatement::of`])
/// and uphold `count('?') == parameters.len()` from construction on. Being
/// immutable they are freely shareable across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedStatement {
    sql: String,
    parameters: Vec<Value>,
}

impl ParameterizedStatement {
    pub(crate) fn new(sql: String, parameters: Vec<Value>) -> Self {
        debug_assert_eq!(count_placeholders(&sql), parameters.len());
        Self { sql, parameters }
    }

    /// Builds a statement from SQL text and positional values, expanding
    /// `<?>` list markers against list or array values.
    pub fn of(
        sql: impl Into<String>,
        parameters: impl IntoIterator<Item = Value>,
    ) -> Result<Self> {
        parameters
            .into_iter()
            .fold(OrderedBinder::of(sql), |binder, value| binder.add(value))
            .resolve()
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    /// SQL text with every parameter inlined as a literal, for logging and
    /// debugging only. Never send the result to a database.
    pub fn embedded_sql(&self) -> String {
        let mut out = String::with_capacity(self.sql.len() + 16 * self.parameters.len());
        let mut rest = self.sql.as_str();
        let mut parameters = self.parameters.iter();
        while let Some(pos) = rest.find('?') {
            out.push_str(&rest[..pos]);
            match parameters.next() {
                Some(v) => write_literal(&mut out, v),
                None => out.push('?'),
            }
            rest = &rest[pos + 1..];
        }
        out.push_str(rest);
        out
    }
}

impl Display for ParameterizedStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "sql=[{}]", self.sql)?;
        if !self.parameters.is_empty() {
            write!(f, ", parameters={:?}", self.parameters)?;
        }
        Ok(())
    }
}
