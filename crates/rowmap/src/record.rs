use crate::Entity;

use indexmap::IndexMap;
use rowmap_core::{
    stmt::{Params, Primitive, Value},
    Result,
};
use rowmap_sql::Scheme;

/// The default prototype: an identifier plus whatever other properties the
/// selected row carried.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    id: Option<i64>,
    properties: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a property other than `id`.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    /// Sets a property. `id` is converted and stored as the identifier.
    pub fn set(&mut self, property: &str, value: impl Into<Value>) -> Result<()> {
        self.set_property(property, value.into())
    }

    /// Properties other than `id`, in the order they were first set.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(property, value)| (property.as_str(), value))
    }
}

impl Entity for Record {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert(Scheme::ID, self.id);
        for (property, value) in &self.properties {
            params.insert(property, value.clone());
        }
        params
    }

    fn set_property(&mut self, property: &str, value: Value) -> Result<()> {
        if property == Scheme::ID {
            self.id = Option::<i64>::load(value)?;
        } else {
            self.properties.insert(property.to_string(), value);
        }
        Ok(())
    }
}
