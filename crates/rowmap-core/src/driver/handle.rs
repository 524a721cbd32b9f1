use super::Statement;
use crate::{stmt::Params, Result};

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// A shared, lockable reference to a compiled statement.
///
/// Mappers keep their compiled statements behind handles so that related
/// entities can hold on to the update statement they were hydrated with.
#[derive(Debug, Clone)]
pub struct StatementHandle {
    inner: Arc<Mutex<Box<dyn Statement>>>,
}

impl StatementHandle {
    pub fn new(statement: Box<dyn Statement>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(statement)),
        }
    }

    /// Locks the statement for an execute-then-read sequence.
    pub async fn lock(&self) -> MutexGuard<'_, Box<dyn Statement>> {
        self.inner.lock().await
    }

    /// Executes the statement, discarding any rows it produces.
    pub async fn execute(&self, params: &Params) -> Result<()> {
        let mut statement = self.lock().await;
        statement.execute(params).await?;
        statement.close_cursor();
        Ok(())
    }

    /// The SQL text of the underlying statement.
    pub async fn sql(&self) -> String {
        self.lock().await.sql().to_string()
    }

    /// Returns `true` if both handles refer to the same compiled statement.
    pub fn ptr_eq(&self, other: &StatementHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
