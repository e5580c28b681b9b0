use crate::Value;

/// Table-mapping collaborator supplying the SQL shape and per-object
/// parameter values for one table.
///
/// Implementations typically come from a mapping layer that knows the
/// column set of `T`; the engine itself performs no field discovery. The
/// multi-row SQL variants must carry exactly `width` value-tuples whose
/// combined placeholder count matches `width` times the per-object
/// parameter count.
pub trait TableBinding<T> {
    /// Table name, used for logging only.
    fn table_name(&self) -> &str;
    fn insert_sql(&self) -> String;
    fn merge_sql(&self) -> String;
    fn multirow_insert_sql(&self, width: usize) -> String;
    fn multirow_merge_sql(&self, width: usize) -> String;
    /// One row's worth of insert parameters, in column order.
    fn insert_parameters(&self, object: &T) -> Vec<Value>;
    /// One row's worth of merge parameters, in column order.
    fn merge_parameters(&self, object: &T) -> Vec<Value>;
}
