mod builder;
pub use builder::Builder;

mod cache;
use cache::StatementCache;

use crate::{Entity, Record};

use rowmap_core::{
    err, params,
    stmt::{Params, Primitive, Row, Value},
    Connection, Error, Result, StatementHandle,
};
use rowmap_sql::{Scheme, Statements, Table};
use std::{fmt, marker::PhantomData, sync::Arc};

/// Maps the rows of one table to entities of type `E`.
///
/// A mapper compiles its fetch, insert, update and delete statements when it
/// is built. Conditioned `select` and `count` statements are compiled on
/// first use and cached for the lifetime of the mapper, keyed by the
/// condition text as written by the caller.
///
/// Every operation holds the statement it runs for the whole execute-then-read
/// sequence, so a mapper can be shared between tasks.
pub struct Mapper<E = Record> {
    connection: Arc<dyn Connection>,
    table: Table,
    statements: Statements,
    fetch: StatementHandle,
    insert: StatementHandle,
    update: StatementHandle,
    delete: StatementHandle,
    cache: StatementCache,
    _prototype: PhantomData<fn() -> E>,
}

impl Mapper {
    /// Builds a mapper for `table` hydrating [`Record`]s.
    ///
    /// Fails with an invalid scheme error, before anything is compiled, if
    /// `scheme` does not map `id`.
    pub async fn new(
        connection: Arc<dyn Connection>,
        table: impl Into<String>,
        scheme: impl Into<Scheme>,
    ) -> Result<Mapper> {
        Mapper::builder(connection, table, scheme).build().await
    }

    pub fn builder(
        connection: Arc<dyn Connection>,
        table: impl Into<String>,
        scheme: impl Into<Scheme>,
    ) -> Builder {
        Builder::new(connection, table.into(), scheme.into())
    }
}

impl<E: Entity> Mapper<E> {
    /// Name of the type rows are hydrated into.
    pub fn prototype(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    /// Switches the type rows are hydrated into.
    ///
    /// Compiled statements, including the cache, carry over unchanged.
    pub fn with_prototype<U: Entity>(self) -> Mapper<U> {
        Mapper {
            connection: self.connection,
            table: self.table,
            statements: self.statements,
            fetch: self.fetch,
            insert: self.insert,
            update: self.update,
            delete: self.delete,
            cache: self.cache,
            _prototype: PhantomData,
        }
    }

    pub fn connection(&self) -> &Arc<dyn Connection> {
        &self.connection
    }

    pub fn table(&self) -> &str {
        self.table.name()
    }

    pub fn scheme(&self) -> &Scheme {
        self.table.scheme()
    }

    /// The statement texts generated from the scheme.
    pub fn statements(&self) -> &Statements {
        &self.statements
    }

    /// The update statement bound to related entities this mapper hydrates.
    pub fn update_statement(&self) -> &StatementHandle {
        &self.update
    }

    /// Number of conditioned statements compiled so far.
    pub async fn cached_statements(&self) -> usize {
        self.cache.len().await
    }

    /// Replaces `!property` tokens in `sql` with qualified column names.
    pub fn convert(&self, sql: &str) -> String {
        self.table.convert(sql)
    }

    /// Builds a join clause from this mapper's `local` property to the
    /// `target` property of `other`.
    pub fn join<U>(&self, kind: &str, other: &Mapper<U>, local: &str, target: &str) -> String {
        self.table.join(kind, &other.table, local, target)
    }

    /// Fetches the entity with the given identifier.
    ///
    /// Returns `None` when no row matches and a uniqueness violation when
    /// more than one does.
    pub async fn fetch(&self, id: i64) -> Result<Option<E>> {
        let params = params! { Scheme::ID => id };

        let row = {
            let mut statement = self.fetch.lock().await;
            statement.execute(&params).await?;

            let row = match statement.row_count() {
                0 => None,
                1 => match statement.fetch_row() {
                    Some(row) => Some(row),
                    None => {
                        statement.close_cursor();
                        return Err(err!(
                            "driver reported one row but returned none; table={}",
                            self.table.name()
                        ));
                    }
                },
                rows => {
                    statement.close_cursor();
                    return Err(Error::uniqueness_violation(self.table.name(), rows));
                }
            };

            statement.close_cursor();
            row
        };

        row.map(|row| self.hydrate(row)).transpose()
    }

    /// Selects every entity matching `condition`.
    ///
    /// `condition` is appended to the select base after `!property` tokens
    /// are translated; it may hold any trailing clauses (`WHERE`, `GROUP BY`,
    /// `ORDER BY`, `LIMIT`).
    pub async fn select(&self, condition: &str, params: impl Into<Params>) -> Result<Vec<E>> {
        let params = params.into();
        let statement = self
            .cache
            .get_or_compile(&*self.connection, self.statements.select_with(condition), || {
                format!("{} {}", self.statements.select, self.table.convert(condition))
            })
            .await?;

        let rows = {
            let mut statement = statement.lock().await;
            statement.execute(&params).await?;
            let rows = statement.fetch_rows();
            statement.close_cursor();
            rows
        };

        rows.into_iter().map(|row| self.hydrate(row)).collect()
    }

    /// Counts the rows matching `condition`.
    pub async fn count(&self, condition: &str, params: impl Into<Params>) -> Result<u64> {
        let params = params.into();
        let statement = self
            .cache
            .get_or_compile(&*self.connection, self.statements.count_with(condition), || {
                format!("{} {}", self.statements.count, self.table.convert(condition))
            })
            .await?;

        let row = {
            let mut statement = statement.lock().await;
            statement.execute(&params).await?;
            let row = statement.fetch_row();
            statement.close_cursor();
            row
        };

        // A grouped condition matching nothing yields no row at all.
        let Some(row) = row else {
            return Ok(0);
        };

        let Some(count) = row.get("count") else {
            return Err(err!(
                "count statement returned no `count` column; table={}",
                self.table.name()
            ));
        };

        let count = i64::load(count.clone())?;
        u64::try_from(count).map_err(|_| Error::type_conversion(Value::I64(count), "u64"))
    }

    /// Inserts `entity` and stores the generated identifier in it.
    ///
    /// On failure the identifier is left untouched.
    pub async fn insert(&self, entity: &mut E) -> Result<()> {
        let params = entity.to_params();

        let id = {
            let mut statement = self.insert.lock().await;
            statement.execute(&params).await?;
            statement.close_cursor();

            match statement.last_insert_id() {
                Some(id) => id,
                None => self.connection.last_insert_id().await?,
            }
        };

        entity.set_id(Some(id));
        Ok(())
    }

    /// Writes all of the entity's values to the row with its identifier.
    pub async fn update(&self, entity: &E) -> Result<()> {
        self.update.execute(&entity.to_params()).await
    }

    /// Deletes the row with the given identifier.
    ///
    /// Deleting an identifier that matches no row is not an error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.delete.execute(&params! { Scheme::ID => id }).await
    }

    fn hydrate(&self, row: Row) -> Result<E> {
        let mut entity = E::hydrate(row)?;
        if let Some(entity) = entity.as_self_persistable() {
            entity.bind_save_statement(self.update.clone());
        }
        Ok(entity)
    }
}

impl<E> fmt::Debug for Mapper<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("table", &self.table)
            .field("prototype", &std::any::type_name::<E>())
            .field("connection", &self.connection)
            .finish()
    }
}

async fn compile(connection: &dyn Connection, sql: &str) -> Result<StatementHandle> {
    log::debug!("compiling statement; sql={sql}");
    let statement = connection.prepare(sql).await?;
    Ok(StatementHandle::new(statement))
}
