use super::{compile, Mapper, StatementCache};
use crate::Entity;

use rowmap_core::{Connection, Result};
use rowmap_sql::{Scheme, Statements, Table};
use std::{marker::PhantomData, sync::Arc};

/// Configures and builds a [`Mapper`].
#[derive(Debug)]
pub struct Builder {
    connection: Arc<dyn Connection>,
    table: String,
    scheme: Scheme,
    statement_cache_capacity: Option<usize>,
}

impl Builder {
    pub(super) fn new(connection: Arc<dyn Connection>, table: String, scheme: Scheme) -> Self {
        Self {
            connection,
            table,
            scheme,
            statement_cache_capacity: None,
        }
    }

    /// Caps the number of cached conditioned statements.
    ///
    /// When the cache is full the oldest statement is dropped. A capacity of
    /// zero disables caching. The cache is unbounded by default.
    pub fn statement_cache_capacity(mut self, capacity: usize) -> Self {
        self.statement_cache_capacity = Some(capacity);
        self
    }

    /// Validates the scheme, then compiles the fetch, insert, update and
    /// delete statements, in that order.
    pub async fn build<E: Entity>(self) -> Result<Mapper<E>> {
        let table = Table::new(self.table, self.scheme)?;
        let statements = Statements::new(&table);
        let connection = &*self.connection;

        let fetch = compile(connection, &statements.fetch).await?;
        let insert = compile(connection, &statements.insert).await?;
        let update = compile(connection, &statements.update).await?;
        let delete = compile(connection, &statements.delete).await?;

        Ok(Mapper {
            cache: StatementCache::new(self.statement_cache_capacity),
            connection: self.connection,
            table,
            statements,
            fetch,
            insert,
            update,
            delete,
            _prototype: PhantomData,
        })
    }
}
