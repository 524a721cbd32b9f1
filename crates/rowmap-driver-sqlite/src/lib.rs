mod value;
use value::Value;

use rowmap_core::{
    async_trait, driver, err,
    stmt::{self, Params, Row},
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    collections::VecDeque,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};
use url::Url;

/// A SQLite database connection.
///
/// Clones share the same underlying connection, so statements prepared
/// through any clone see the same data and the same generated keys.
#[derive(Debug, Clone)]
pub struct Sqlite {
    connection: Arc<Mutex<RusqliteConnection>>,
}

impl Sqlite {
    /// Opens a SQLite database from a connection URL.
    ///
    /// `sqlite::memory:` opens a fresh in-memory database; `sqlite:<path>`
    /// opens (or creates) the file at `path`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(err!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            ));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(storage_error)?;
        Ok(Self::from_connection(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(storage_error)?;
        Ok(Self::from_connection(connection))
    }

    fn from_connection(connection: RusqliteConnection) -> Self {
        Self {
            connection: Arc::new(Mutex::new(connection)),
        }
    }

    /// Runs one or more `;` separated statements without parameters, e.g. to
    /// create tables.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        lock(&self.connection)?
            .execute_batch(sql)
            .map_err(storage_error)
    }
}

#[async_trait]
impl driver::Connection for Sqlite {
    async fn prepare(&self, sql: &str) -> Result<Box<dyn driver::Statement>> {
        // Compile once up front so syntax errors and unknown tables surface
        // here; executions reuse the connection's statement cache.
        lock(&self.connection)?
            .prepare_cached(sql)
            .map_err(storage_error)?;

        Ok(Box::new(Statement {
            connection: self.connection.clone(),
            sql: sql.to_string(),
            rows: VecDeque::new(),
            row_count: 0,
            last_insert_id: None,
        }))
    }

    async fn last_insert_id(&self) -> Result<i64> {
        Ok(lock(&self.connection)?.last_insert_rowid())
    }
}

/// A statement compiled on a [`Sqlite`] connection.
///
/// Query results are read eagerly on execution and buffered in the cursor.
#[derive(Debug)]
pub struct Statement {
    connection: Arc<Mutex<RusqliteConnection>>,
    sql: String,
    rows: VecDeque<Row>,
    row_count: usize,

    /// Rowid read right after the last execution that changed rows, while
    /// the connection was still locked
    last_insert_id: Option<i64>,
}

#[async_trait]
impl driver::Statement for Statement {
    fn sql(&self) -> &str {
        &self.sql
    }

    async fn execute(&mut self, params: &Params) -> Result<()> {
        log::trace!("executing statement; sql={}", self.sql);

        self.rows.clear();
        self.row_count = 0;
        self.last_insert_id = None;

        let connection = lock(&self.connection)?;
        let mut stmt = connection.prepare_cached(&self.sql).map_err(storage_error)?;

        let null = stmt::Value::Null;
        for index in 1..=stmt.parameter_count() {
            let value = stmt
                .parameter_name(index)
                .and_then(|name| params.get(name.trim_start_matches([':', '@', '$'])))
                .unwrap_or(&null);
            stmt.raw_bind_parameter(index, Value(value))
                .map_err(storage_error)?;
        }

        let columns: Arc<[String]> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        if columns.is_empty() {
            self.row_count = stmt.raw_execute().map_err(storage_error)?;
            if self.row_count > 0 {
                self.last_insert_id = Some(connection.last_insert_rowid());
            }
            return Ok(());
        }

        let mut rows = stmt.raw_query();
        while let Some(row) = rows.next().map_err(storage_error)? {
            let mut values = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                values.push(Value::from_sql(row.get_ref(index).map_err(storage_error)?)?);
            }
            self.rows.push_back(Row::new(columns.clone(), values));
        }

        self.row_count = self.rows.len();
        Ok(())
    }

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn fetch_row(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    fn last_insert_id(&self) -> Option<i64> {
        self.last_insert_id
    }

    fn close_cursor(&mut self) {
        self.rows.clear();
    }
}

fn lock(connection: &Mutex<RusqliteConnection>) -> Result<MutexGuard<'_, RusqliteConnection>> {
    connection
        .lock()
        .map_err(|_| err!("sqlite connection lock poisoned"))
}

/// Keeps SQLite's extended result code and message verbatim.
fn storage_error(err: rusqlite::Error) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(failure, message) => {
            let message = message.unwrap_or_else(|| failure.to_string());
            Error::storage(Some(failure.extended_code.to_string()), message)
        }
        // Syntax errors found while compiling; rusqlite adds the SQL text and
        // offset, which are not part of the driver message.
        rusqlite::Error::SqlInputError { error, msg, .. } => {
            Error::storage(Some(error.extended_code.to_string()), msg)
        }
        err => Error::driver_operation_failed(err),
    }
}
