use rowmap_core::{
    async_trait,
    stmt::{Params, Row, Value},
    Result, StatementHandle,
};

/// A plain value type holding one row of a table.
///
/// Rows are hydrated by creating a default instance and assigning every
/// selected column through [`set_property`](Entity::set_property). The
/// property names are the ones declared in the mapper's scheme. Implement
/// this with `#[derive(Entity)]` rather than by hand.
pub trait Entity: Default + Send + Sync + 'static {
    /// The row identifier, `None` until the entity is inserted.
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: Option<i64>);

    /// The entity's current field values, keyed by property name, including
    /// `id`.
    fn to_params(&self) -> Params;

    /// Assigns one property from a column value. Unknown properties are
    /// ignored.
    fn set_property(&mut self, property: &str, value: Value) -> Result<()>;

    /// Builds an entity from a fetched row.
    fn hydrate(row: Row) -> Result<Self> {
        let mut entity = Self::default();
        for (property, value) in row.into_pairs() {
            entity.set_property(&property, value)?;
        }
        Ok(entity)
    }

    /// Returns the entity as a [`SelfPersistable`] if it can save itself.
    ///
    /// Mappers bind their update statement to entities that return `Some`
    /// here right after hydrating them.
    fn as_self_persistable(&mut self) -> Option<&mut dyn SelfPersistable> {
        None
    }
}

/// An entity that can persist itself through a statement bound to it by the
/// mapper that hydrated it.
#[async_trait]
pub trait SelfPersistable: Send + Sync {
    /// Binds the statement used by [`save`](SelfPersistable::save). Only the
    /// first call has an effect.
    fn bind_save_statement(&mut self, statement: StatementHandle);

    /// The bound statement, if any.
    fn save_statement(&self) -> Option<&StatementHandle>;

    /// Executes the bound statement with the entity's current values.
    async fn save(&self) -> Result<()>;
}
