use super::compile;

use indexmap::IndexMap;
use rowmap_core::{Connection, Result, StatementHandle};
use tokio::sync::Mutex;

/// Conditioned statements keyed by their untranslated text.
#[derive(Debug)]
pub(super) struct StatementCache {
    entries: Mutex<IndexMap<String, StatementHandle>>,
    capacity: Option<usize>,
}

impl StatementCache {
    pub(super) fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
            capacity,
        }
    }

    /// Returns the statement cached under `key`, compiling `sql()` on a miss.
    pub(super) async fn get_or_compile(
        &self,
        connection: &dyn Connection,
        key: String,
        sql: impl FnOnce() -> String,
    ) -> Result<StatementHandle> {
        let mut entries = self.entries.lock().await;

        if let Some(statement) = entries.get(&key) {
            log::trace!("statement cache hit; key={key}");
            return Ok(statement.clone());
        }

        let statement = compile(connection, &sql()).await?;

        match self.capacity {
            Some(0) => return Ok(statement),
            Some(capacity) => {
                while entries.len() >= capacity {
                    if let Some((evicted, _)) = entries.shift_remove_index(0) {
                        log::debug!("statement cache evicted; key={evicted}");
                    }
                }
            }
            None => {}
        }

        entries.insert(key, statement.clone());
        Ok(statement)
    }

    pub(super) async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}
