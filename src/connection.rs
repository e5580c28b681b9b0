use crate::{Result, Value};

/// One prepared statement on a live connection.
///
/// Binding is cumulative: `bind` appends to the current row of parameters,
/// and both [`StatementHandle::execute_update`] and
/// [`StatementHandle::add_batch`] consume the values bound so far, leaving
/// the handle ready for the next row.
pub trait StatementHandle {
    /// Append one parameter value to the current row.
    fn bind(&mut self, value: Value) -> Result<()>;
    /// Execute with the currently bound row, returning the affected-row
    /// count.
    fn execute_update(&mut self) -> Result<u64>;
    /// Queue the currently bound row onto the pending batch.
    fn add_batch(&mut self) -> Result<()>;
    /// Execute the pending batch, returning one result per queued row in
    /// queue order.
    fn execute_batch(&mut self) -> Result<Vec<u64>>;
    /// Release the statement. Dropping the handle releases it too; the
    /// explicit form surfaces driver errors.
    fn close(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Synchronous database connection seam.
///
/// The engine treats the connection as exclusively owned by the calling
/// thread for the duration of one multi-row write: autocommit is toggled
/// and restored around that single call, so sharing the connection during
/// this window is unsafe.
pub trait Connection {
    type Statement: StatementHandle;

    fn prepare(&mut self, sql: &str) -> Result<Self::Statement>;
    fn auto_commit(&self) -> Result<bool>;
    fn set_auto_commit(&mut self, auto_commit: bool) -> Result<()>;
    fn commit(&mut self) -> Result<()>;
    fn rollback(&mut self) -> Result<()>;
}
