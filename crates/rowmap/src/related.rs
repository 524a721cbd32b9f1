use crate::{Entity, SelfPersistable};

use rowmap_core::{
    async_trait,
    stmt::{Params, Row, Value},
    Error, Result, StatementHandle,
};
use std::ops::{Deref, DerefMut};

/// An entity that remembers the update statement of the mapper that
/// hydrated it, so it can be saved without going back through the mapper.
///
/// Use `Related<E>` as a mapper prototype to get self-saving entities:
///
/// ```ignore
/// let users = mapper.with_prototype::<Related<User>>();
/// let mut user = users.fetch(1).await?.unwrap();
/// user.login = "admin".to_string();
/// user.save().await?;
/// ```
#[derive(Debug, Default, Clone)]
pub struct Related<E> {
    entity: E,
    save_statement: Option<StatementHandle>,
}

impl<E: Entity> Related<E> {
    /// Wraps an entity with no bound statement.
    pub fn new(entity: E) -> Self {
        Self {
            entity,
            save_statement: None,
        }
    }

    pub fn into_inner(self) -> E {
        self.entity
    }

    pub fn is_bound(&self) -> bool {
        self.save_statement.is_some()
    }

    /// Executes the bound statement with all of the entity's values.
    ///
    /// Fails with an unbound save statement error if the entity was not
    /// hydrated by a mapper.
    pub async fn save(&self) -> Result<()> {
        let Some(statement) = &self.save_statement else {
            return Err(Error::unbound_save_statement());
        };

        statement.execute(&self.entity.to_params()).await
    }
}

impl<E> Deref for Related<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.entity
    }
}

impl<E> DerefMut for Related<E> {
    fn deref_mut(&mut self) -> &mut E {
        &mut self.entity
    }
}

impl<E: Entity> Entity for Related<E> {
    fn id(&self) -> Option<i64> {
        self.entity.id()
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.entity.set_id(id);
    }

    fn to_params(&self) -> Params {
        self.entity.to_params()
    }

    fn set_property(&mut self, property: &str, value: Value) -> Result<()> {
        self.entity.set_property(property, value)
    }

    fn hydrate(row: Row) -> Result<Self> {
        E::hydrate(row).map(Related::new)
    }

    fn as_self_persistable(&mut self) -> Option<&mut dyn SelfPersistable> {
        Some(self)
    }
}

#[async_trait]
impl<E: Entity> SelfPersistable for Related<E> {
    fn bind_save_statement(&mut self, statement: StatementHandle) {
        if self.save_statement.is_none() {
            self.save_statement = Some(statement);
        }
    }

    fn save_statement(&self) -> Option<&StatementHandle> {
        self.save_statement.as_ref()
    }

    async fn save(&self) -> Result<()> {
        Related::save(self).await
    }
}
