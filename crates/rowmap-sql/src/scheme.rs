use indexmap::IndexMap;

/// Maps entity property names to table column names.
///
/// Iteration order is the order mappings were added; generated statements
/// list columns in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheme {
    fields: IndexMap<String, String>,
}

#[derive(Debug, Default)]
pub struct Builder {
    scheme: Scheme,
}

impl Scheme {
    /// Property holding the row identifier. Every usable scheme maps it.
    pub const ID: &'static str = "id";

    /// Builds a scheme from column names, using each column name as its own
    /// property name.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        fields
            .into_iter()
            .map(|field| {
                let field = field.into();
                (field.clone(), field)
            })
            .collect()
    }

    /// Builds a scheme from `(property, field)` pairs, in order.
    pub fn from_pairs<I, P, F>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, F)>,
        P: Into<String>,
        F: Into<String>,
    {
        pairs.into_iter().collect()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Column storing `property`, if the scheme maps it.
    pub fn field(&self, property: &str) -> Option<&str> {
        self.fields.get(property).map(String::as_str)
    }

    /// Column storing the row identifier.
    pub fn id_field(&self) -> Option<&str> {
        self.field(Self::ID)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.fields.contains_key(property)
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates `(property, field)` pairs in scheme order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(property, field)| (property.as_str(), field.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Builder {
    /// Maps the `id` property to `field`.
    pub fn id(self, field: impl Into<String>) -> Self {
        self.property(Scheme::ID, field)
    }

    /// Maps `property` to `field`. Mapping a property twice keeps its first
    /// position and the last field.
    pub fn property(mut self, property: impl Into<String>, field: impl Into<String>) -> Self {
        self.scheme.fields.insert(property.into(), field.into());
        self
    }

    /// Adds a column whose property shares its name.
    pub fn field(self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.property(field.clone(), field)
    }

    pub fn build(self) -> Scheme {
        self.scheme
    }
}

impl<P, F> FromIterator<(P, F)> for Scheme
where
    P: Into<String>,
    F: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, F)>>(iter: I) -> Self {
        Scheme {
            fields: iter
                .into_iter()
                .map(|(property, field)| (property.into(), field.into()))
                .collect(),
        }
    }
}

impl<P, F, const N: usize> From<[(P, F); N]> for Scheme
where
    P: Into<String>,
    F: Into<String>,
{
    fn from(pairs: [(P, F); N]) -> Self {
        Scheme::from_pairs(pairs)
    }
}
