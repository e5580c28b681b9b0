use crate::{
    BatchAccumulator, Connection, EngineConfig, Result, StatementHandle, TableBinding, Value,
    partition,
};
use std::marker::PhantomData;

/// How a multi-row write is shaped and executed. The set is closed: these
/// three are the only variants and they are selected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiRowStrategy {
    /// One fixed single-row statement, objects queued through a batch
    /// accumulator. The portable baseline.
    SimpleBatch,
    /// One multi-row statement per partition, executed immediately.
    /// Minimizes statement preparation at one round trip per partition.
    MultiRowInOneStatement,
    /// Multi-row statements themselves queued through a batch accumulator,
    /// trading memory for fewer round trips.
    BatchOfMultiRow,
}

/// Writes arrays of domain objects through a [`Connection`], shaping the
/// SQL via a [`TableBinding`] collaborator.
///
/// Instances are cheap and not thread-safe; scope one to one write
/// operation on one connection. Result vectors carry one entry per logical
/// write unit in partition order: per flushed batch row for
/// [`MultiRowStrategy::SimpleBatch`], per partition otherwise.
pub struct MultiRowWriter<T, B: TableBinding<T>> {
    strategy: MultiRowStrategy,
    binding: B,
    config: EngineConfig,
    marker: PhantomData<fn(&T)>,
}

impl<T, B: TableBinding<T>> MultiRowWriter<T, B> {
    pub fn new(strategy: MultiRowStrategy, binding: B, config: EngineConfig) -> Self {
        Self {
            strategy,
            binding,
            config,
            marker: PhantomData,
        }
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn multi_row_insert<C: Connection>(
        &self,
        connection: &mut C,
        objects: &[T],
    ) -> Result<Vec<u64>> {
        self.write(
            connection,
            objects,
            &|| self.binding.insert_sql(),
            &|width| self.binding.multirow_insert_sql(width),
            &|object| self.binding.insert_parameters(object),
        )
    }

    pub fn multi_row_merge<C: Connection>(
        &self,
        connection: &mut C,
        objects: &[T],
    ) -> Result<Vec<u64>> {
        self.write(
            connection,
            objects,
            &|| self.binding.merge_sql(),
            &|width| self.binding.multirow_merge_sql(width),
            &|object| self.binding.merge_parameters(object),
        )
    }

    fn write<C: Connection>(
        &self,
        connection: &mut C,
        objects: &[T],
        single_sql: &dyn Fn() -> String,
        multirow_sql: &dyn Fn(usize) -> String,
        parameters: &dyn Fn(&T) -> Vec<Value>,
    ) -> Result<Vec<u64>> {
        if objects.is_empty() {
            return Ok(Vec::new());
        }
        let results = match self.strategy {
            MultiRowStrategy::SimpleBatch => {
                self.batched(connection, &single_sql(), parameters, objects)
            }
            MultiRowStrategy::MultiRowInOneStatement => {
                self.one_statement(connection, multirow_sql, parameters, objects)
            }
            MultiRowStrategy::BatchOfMultiRow => {
                self.one_statement_and_batch(connection, multirow_sql, parameters, objects)
            }
        }?;
        log::debug!(
            "[{}] rows over [{}] objects written into [{}]",
            results.iter().sum::<u64>(),
            objects.len(),
            self.binding.table_name(),
        );
        Ok(results)
    }

    fn batched<C: Connection>(
        &self,
        connection: &mut C,
        sql: &str,
        parameters: &dyn Fn(&T) -> Vec<Value>,
        objects: &[T],
    ) -> Result<Vec<u64>> {
        with_transaction_scope(connection, |connection| {
            let mut statement = connection.prepare(sql)?;
            let mut accumulator = BatchAccumulator::new(self.config.batch_size, &mut statement);
            for object in objects {
                for value in parameters(object) {
                    accumulator.statement().bind(value)?;
                }
                accumulator.add_and_flush_if_full()?;
            }
            let results = accumulator.finish()?;
            statement.close()?;
            Ok(results)
        })
    }

    fn one_statement<C: Connection>(
        &self,
        connection: &mut C,
        multirow_sql: &dyn Fn(usize) -> String,
        parameters: &dyn Fn(&T) -> Vec<Value>,
        objects: &[T],
    ) -> Result<Vec<u64>> {
        let partitions = partition(self.config.multi_row_size, objects);
        with_transaction_scope(connection, |connection| {
            let last = partitions.len() - 1;
            let mut results = vec![0; partitions.len()];
            if last > 0 {
                let mut statement = connection.prepare(&multirow_sql(self.config.multi_row_size))?;
                for (i, objects) in partitions[..last].iter().enumerate() {
                    bind_rows(&mut statement, objects, parameters)?;
                    results[i] = statement.execute_update()?;
                }
                statement.close()?;
            }
            // The last partition generally has a different width, so it
            // cannot reuse the fixed-width statement.
            let objects = partitions[last];
            let mut statement = connection.prepare(&multirow_sql(objects.len()))?;
            bind_rows(&mut statement, objects, parameters)?;
            results[last] = statement.execute_update()?;
            statement.close()?;
            Ok(results)
        })
    }

    fn one_statement_and_batch<C: Connection>(
        &self,
        connection: &mut C,
        multirow_sql: &dyn Fn(usize) -> String,
        parameters: &dyn Fn(&T) -> Vec<Value>,
        objects: &[T],
    ) -> Result<Vec<u64>> {
        let partitions = partition(self.config.multi_row_size, objects);
        with_transaction_scope(connection, |connection| {
            let last = partitions.len() - 1;
            let mut results = vec![0; partitions.len()];
            if last > 0 {
                let mut statement = connection.prepare(&multirow_sql(self.config.multi_row_size))?;
                let mut accumulator =
                    BatchAccumulator::new(self.config.batch_size_with_multi_row, &mut statement);
                for objects in &partitions[..last] {
                    bind_rows(accumulator.statement(), objects, parameters)?;
                    accumulator.add_and_flush_if_full()?;
                }
                let first = accumulator.finish()?;
                results[..first.len()].copy_from_slice(&first);
                statement.close()?;
            }
            let objects = partitions[last];
            let mut statement = connection.prepare(&multirow_sql(objects.len()))?;
            bind_rows(&mut statement, objects, parameters)?;
            results[last] = statement.execute_update()?;
            statement.close()?;
            Ok(results)
        })
    }
}

fn bind_rows<S: StatementHandle, T>(
    statement: &mut S,
    objects: &[T],
    parameters: &dyn Fn(&T) -> Vec<Value>,
) -> Result<()> {
    for object in objects {
        for value in parameters(object) {
            statement.bind(value)?;
        }
    }
    Ok(())
}

/// Runs `body` with autocommit forced off, making exactly one
/// commit-or-rollback decision and always restoring the connection's
/// original autocommit flag afterwards.
///
/// The decision is asymmetric, matching long-observed behavior: commit on
/// success only when the original flag was on (the caller expected
/// auto-commit), roll back on failure only when it was off (the caller was
/// already managing an explicit transaction). Cleanup failures after an
/// execution error are logged and never mask the original error.
fn with_transaction_scope<C: Connection, R>(
    connection: &mut C,
    body: impl FnOnce(&mut C) -> Result<R>,
) -> Result<R> {
    let original = connection.auto_commit()?;
    connection.set_auto_commit(false)?;
    let result = body(connection);
    let decision = match &result {
        Ok(_) if original => connection.commit(),
        Err(_) if !original => connection.rollback(),
        _ => Ok(()),
    };
    let restored = connection.set_auto_commit(original);
    match result {
        Ok(value) => {
            decision?;
            restored?;
            Ok(value)
        }
        Err(error) => {
            if let Err(cleanup) = decision {
                log::warn!("rollback failed after write error: {:#}", cleanup);
            }
            if let Err(cleanup) = restored {
                log::warn!("could not restore autocommit: {:#}", cleanup);
            }
            Err(error)
        }
    }
}
