use crate::{async_trait, stmt::Params, stmt::Row, Result};

use std::fmt::Debug;

/// A compiled statement with its own cursor.
///
/// Executing a statement replaces its cursor, so a statement must not be
/// executed again while a previous result is still being read. Callers share
/// statements through [`StatementHandle`](super::StatementHandle), which
/// serialises the execute-then-read sequence.
#[async_trait]
pub trait Statement: Debug + Send + 'static {
    /// The SQL text the statement was compiled from.
    fn sql(&self) -> &str;

    /// Executes the statement with named parameters.
    ///
    /// Placeholders with no matching entry in `params` are bound to NULL;
    /// entries with no matching placeholder are ignored.
    async fn execute(&mut self, params: &Params) -> Result<()>;

    /// Number of rows produced (queries) or affected (other statements) by
    /// the last execution.
    fn row_count(&self) -> usize;

    /// Takes the next row from the cursor.
    fn fetch_row(&mut self) -> Option<Row>;

    /// Takes all remaining rows from the cursor.
    fn fetch_rows(&mut self) -> Vec<Row> {
        std::iter::from_fn(|| self.fetch_row()).collect()
    }

    /// The key generated by the last execution, if the driver can report it
    /// for this statement alone.
    ///
    /// Mappers prefer this over [`Connection::last_insert_id`], which other
    /// statements on the same connection may have moved on.
    ///
    /// [`Connection::last_insert_id`]: super::Connection::last_insert_id
    fn last_insert_id(&self) -> Option<i64> {
        None
    }

    /// Releases the cursor, discarding unread rows.
    fn close_cursor(&mut self);
}
