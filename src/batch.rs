use crate::{Result, StatementHandle};

/// Flush-threshold helper for batched execution against one live prepared
/// statement.
///
/// Each [`BatchAccumulator::add_and_flush_if_full`] queues the statement's
/// currently bound row; once the pending count reaches the threshold the
/// batch is executed and its per-row results appended to the running
/// buffer. The accumulator carries no transaction semantics.
pub struct BatchAccumulator<'s, S: StatementHandle> {
    statement: &'s mut S,
    threshold: usize,
    pending: usize,
    results: Vec<u64>,
}

impl<'s, S: StatementHandle> BatchAccumulator<'s, S> {
    pub fn new(threshold: usize, statement: &'s mut S) -> Self {
        Self {
            statement,
            threshold: threshold.max(1),
            pending: 0,
            results: Vec::new(),
        }
    }

    /// The wrapped handle, for binding the next row's parameters.
    pub fn statement(&mut self) -> &mut S {
        self.statement
    }

    pub fn add_and_flush_if_full(&mut self) -> Result<()> {
        self.statement.add_batch()?;
        self.pending += 1;
        if self.pending >= self.threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Flushes any remaining rows and returns every per-row result, in
    /// insertion order across flush boundaries.
    pub fn finish(mut self) -> Result<Vec<u64>> {
        if self.pending > 0 {
            self.flush()?;
        }
        Ok(self.results)
    }

    fn flush(&mut self) -> Result<()> {
        let results = self.statement.execute_batch()?;
        self.results.extend(results);
        self.pending = 0;
        Ok(())
    }
}
