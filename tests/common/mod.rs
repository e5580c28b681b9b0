#![allow(dead_code)]

use sqlbind::{Connection, Error, Result, StatementHandle, TableBinding, Value};
use std::{cell::RefCell, mem, rc::Rc};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Shared recording state behind one mock connection and its statements.
#[derive(Default)]
pub struct State {
    pub auto_commit: bool,
    /// Every value the engine passed to `set_auto_commit`, in order.
    pub auto_commit_sets: Vec<bool>,
    pub commits: usize,
    pub rollbacks: usize,
    /// SQL text of every prepared statement, in order.
    pub prepared: Vec<String>,
    /// `(sql, values bound)` of every direct execution.
    pub executes: Vec<(String, usize)>,
    /// `(sql, rows flushed)` of every batch execution.
    pub batch_executes: Vec<(String, usize)>,
    /// Zero-based index of the execute operation that fails, counting
    /// direct and batch executions together.
    pub fail_on_execute: Option<usize>,
    execute_calls: usize,
}

impl State {
    fn maybe_fail(&mut self) -> Result<()> {
        let call = self.execute_calls;
        self.execute_calls += 1;
        if self.fail_on_execute == Some(call) {
            return Err(Error::msg("injected execution failure"));
        }
        Ok(())
    }
}

pub struct MockConnection {
    pub state: Rc<RefCell<State>>,
}

impl MockConnection {
    pub fn new(auto_commit: bool) -> Self {
        let state = State {
            auto_commit,
            ..State::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }
}

impl Connection for MockConnection {
    type Statement = MockStatement;

    fn prepare(&mut self, sql: &str) -> Result<MockStatement> {
        self.state.borrow_mut().prepared.push(sql.to_string());
        Ok(MockStatement {
            sql: sql.to_string(),
            bound: Vec::new(),
            pending: Vec::new(),
            state: self.state.clone(),
        })
    }

    fn auto_commit(&self) -> Result<bool> {
        Ok(self.state.borrow().auto_commit)
    }

    fn set_auto_commit(&mut self, auto_commit: bool) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.auto_commit = auto_commit;
        state.auto_commit_sets.push(auto_commit);
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.state.borrow_mut().commits += 1;
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.state.borrow_mut().rollbacks += 1;
        Ok(())
    }
}

pub struct MockStatement {
    sql: String,
    bound: Vec<Value>,
    pending: Vec<Vec<Value>>,
    state: Rc<RefCell<State>>,
}

impl StatementHandle for MockStatement {
    fn bind(&mut self, value: Value) -> Result<()> {
        self.bound.push(value);
        Ok(())
    }

    fn execute_update(&mut self) -> Result<u64> {
        self.state.borrow_mut().maybe_fail()?;
        let bound = mem::take(&mut self.bound);
        self.state
            .borrow_mut()
            .executes
            .push((self.sql.clone(), bound.len()));
        Ok(1)
    }

    fn add_batch(&mut self) -> Result<()> {
        let row = mem::take(&mut self.bound);
        self.pending.push(row);
        Ok(())
    }

    fn execute_batch(&mut self) -> Result<Vec<u64>> {
        self.state.borrow_mut().maybe_fail()?;
        let rows = mem::take(&mut self.pending);
        self.state
            .borrow_mut()
            .batch_executes
            .push((self.sql.clone(), rows.len()));
        Ok(vec![1; rows.len()])
    }
}

#[derive(Clone)]
pub struct Guest {
    pub id: i64,
    pub name: String,
}

pub fn guests(count: usize) -> Vec<Guest> {
    (0..count)
        .map(|i| Guest {
            id: i as i64,
            name: format!("guest_{}", i),
        })
        .collect()
}

pub struct GuestBinding;

impl GuestBinding {
    fn tuples(width: usize) -> String {
        let mut out = String::new();
        for i in 0..width {
            if i > 0 {
                out.push(',');
            }
            out.push_str("(?,?)");
        }
        out
    }
}

impl TableBinding<Guest> for GuestBinding {
    fn table_name(&self) -> &str {
        "guests"
    }

    fn insert_sql(&self) -> String {
        "INSERT INTO guests (id, name) VALUES (?,?)".to_string()
    }

    fn merge_sql(&self) -> String {
        "MERGE INTO guests (id, name) KEY (id) VALUES (?,?)".to_string()
    }

    fn multirow_insert_sql(&self, width: usize) -> String {
        format!("INSERT INTO guests (id, name) VALUES {}", Self::tuples(width))
    }

    fn multirow_merge_sql(&self, width: usize) -> String {
        format!(
            "MERGE INTO guests (id, name) KEY (id) VALUES {}",
            Self::tuples(width)
        )
    }

    fn insert_parameters(&self, object: &Guest) -> Vec<Value> {
        vec![
            Value::Int64(object.id),
            Value::Varchar(object.name.clone()),
        ]
    }

    fn merge_parameters(&self, object: &Guest) -> Vec<Value> {
        self.insert_parameters(object)
    }
}
