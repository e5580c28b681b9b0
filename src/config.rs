use std::borrow::Cow;

/// Tuning knobs for binders and multi-row writers.
///
/// Passed explicitly into constructors; there is no process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Delimiter opening a named parameter token, `:` by default.
    pub named_prefix: Cow<'static, str>,
    /// Delimiter closing a named parameter token, empty by default.
    pub named_suffix: Cow<'static, str>,
    /// Rows queued on a prepared statement before a batch flush.
    pub batch_size: usize,
    /// Value-tuples carried by one multi-row statement.
    pub multi_row_size: usize,
    /// Multi-row statements queued before a flush in the hybrid strategy.
    pub batch_size_with_multi_row: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            named_prefix: Cow::Borrowed(":"),
            named_suffix: Cow::Borrowed(""),
            batch_size: 32,
            multi_row_size: 32,
            batch_size_with_multi_row: 5,
        }
    }
}
