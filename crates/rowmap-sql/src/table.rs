use crate::Scheme;

use regex::{Captures, Regex};
use rowmap_core::{Error, Result};
use std::sync::LazyLock;

/// `!property` tokens in caller supplied SQL fragments.
static PROPERTY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!([A-Za-z0-9_]+)").expect("property token pattern is valid"));

/// A table together with the scheme mapping its columns to entity
/// properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    scheme: Scheme,
}

impl Table {
    /// Creates a table description, rejecting schemes that do not map the
    /// `id` property.
    pub fn new(name: impl Into<String>, scheme: Scheme) -> Result<Self> {
        if scheme.id_field().is_none() {
            return Err(Error::invalid_scheme(format!(
                "key `{}` not found",
                Scheme::ID
            )));
        }

        Ok(Self {
            name: name.into(),
            scheme,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Column storing the row identifier.
    pub fn id_field(&self) -> &str {
        // Checked in `Table::new`
        self.scheme.id_field().unwrap_or(Scheme::ID)
    }

    /// Replaces every `!property` token in `sql` with `table.field`.
    ///
    /// Properties missing from the scheme are used as the field name
    /// verbatim, so raw column names can be qualified the same way.
    pub fn convert(&self, sql: &str) -> String {
        PROPERTY_TOKEN
            .replace_all(sql, |caps: &Captures<'_>| {
                let property = &caps[1];
                let field = self.scheme.field(property).unwrap_or(property);
                format!("{}.{}", self.name, field)
            })
            .into_owned()
    }

    /// Builds `<kind> JOIN other ON table.local = other.target`.
    ///
    /// Each side resolves its own property through its own scheme.
    pub fn join(&self, kind: &str, other: &Table, local: &str, target: &str) -> String {
        format!(
            "{} JOIN {} ON {} = {}",
            kind,
            other.name,
            self.convert(&format!("!{local}")),
            other.convert(&format!("!{target}")),
        )
    }
}
