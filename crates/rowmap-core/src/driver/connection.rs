use super::Statement;
use crate::{async_trait, Result};

use std::fmt::Debug;

#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Compiles `sql` into a reusable statement.
    ///
    /// Placeholders use the named `:property` form.
    async fn prepare(&self, sql: &str) -> Result<Box<dyn Statement>>;

    /// Returns the identifier the storage engine generated for the most
    /// recent successful insert on this connection.
    async fn last_insert_id(&self) -> Result<i64>;
}
