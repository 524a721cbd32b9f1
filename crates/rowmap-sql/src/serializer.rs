//! Builds the fixed statement texts of a table.

#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;
use column::{Assignment, ColumnAlias, Placeholder};

mod delim;
use delim::Comma;

use crate::Table;

/// Serializes the statements a mapper compiles for one table.
#[derive(Debug)]
pub struct Serializer<'a> {
    table: &'a Table,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    /// `SELECT field AS prop, ... FROM table`
    pub fn select(&self) -> String {
        let columns = self
            .table
            .scheme()
            .iter()
            .map(|(property, field)| ColumnAlias { field, property });

        self.build(|f| fmt!(f, "SELECT ", Comma(columns), " FROM ", self.table.name()))
    }

    /// `SELECT COUNT(*) AS count FROM table`
    pub fn count(&self) -> String {
        self.build(|f| fmt!(f, "SELECT COUNT(*) AS count FROM ", self.table.name()))
    }

    /// The select base restricted to one identifier.
    pub fn fetch(&self) -> String {
        let select = self.select();
        self.build(|f| fmt!(f, select.as_str(), " WHERE ", self.by_id()))
    }

    /// `INSERT INTO table (field, ...) VALUES (:prop, ...)`
    pub fn insert(&self) -> String {
        let scheme = self.table.scheme();
        let fields = scheme.iter().map(|(_, field)| field);
        let placeholders = scheme.properties().map(Placeholder);

        self.build(|f| {
            fmt!(
                f,
                "INSERT INTO ",
                self.table.name(),
                " (",
                Comma(fields),
                ") VALUES (",
                Comma(placeholders),
                ")"
            )
        })
    }

    /// `UPDATE table SET field = :prop, ... WHERE idField = :id`
    pub fn update(&self) -> String {
        let assignments = self
            .table
            .scheme()
            .iter()
            .map(|(property, field)| Assignment { field, property });

        self.build(|f| {
            fmt!(
                f,
                "UPDATE ",
                self.table.name(),
                " SET ",
                Comma(assignments),
                " WHERE ",
                self.by_id()
            )
        })
    }

    /// `DELETE FROM table WHERE idField = :id`
    pub fn delete(&self) -> String {
        self.build(|f| fmt!(f, "DELETE FROM ", self.table.name(), " WHERE ", self.by_id()))
    }

    fn by_id(&self) -> Assignment<'a> {
        Assignment {
            field: self.table.id_field(),
            property: crate::Scheme::ID,
        }
    }

    fn build(&self, f: impl FnOnce(&mut Formatter<'_>)) -> String {
        let mut ret = String::new();
        f(&mut Formatter { dst: &mut ret });
        ret
    }
}
