use crate::{Serializer, Table};

/// The statement texts a mapper derives from its table at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    /// Base of every conditioned selection.
    pub select: String,

    /// Base of every conditioned count.
    pub count: String,

    pub fetch: String,
    pub insert: String,
    pub update: String,
    pub delete: String,
}

impl Statements {
    pub fn new(table: &Table) -> Self {
        let serializer = Serializer::new(table);

        Self {
            select: serializer.select(),
            count: serializer.count(),
            fetch: serializer.fetch(),
            insert: serializer.insert(),
            update: serializer.update(),
            delete: serializer.delete(),
        }
    }

    /// Text of a conditioned selection before token translation.
    pub fn select_with(&self, condition: &str) -> String {
        format!("{} {}", self.select, condition)
    }

    /// Text of a conditioned count before token translation.
    pub fn count_with(&self, condition: &str) -> String {
        format!("{} {}", self.count, condition)
    }
}
