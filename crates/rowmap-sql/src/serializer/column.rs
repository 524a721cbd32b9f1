use super::{Formatter, ToSql};

/// `:property`
pub(super) struct Placeholder<'a>(pub(super) &'a str);

/// `field AS property`
pub(super) struct ColumnAlias<'a> {
    pub(super) field: &'a str,
    pub(super) property: &'a str,
}

/// `field = :property`
pub(super) struct Assignment<'a> {
    pub(super) field: &'a str,
    pub(super) property: &'a str,
}

impl ToSql for Placeholder<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, ":", self.0);
    }
}

impl ToSql for ColumnAlias<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.field, " AS ", self.property);
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.field, " = ", Placeholder(self.property));
    }
}
