use rowmap_core::{stmt, Error, Result};
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Bridges rowmap values to and from SQLite column values.
#[derive(Debug)]
pub(crate) struct Value<'a>(pub(crate) &'a stmt::Value);

impl Value<'_> {
    /// Converts a column of the current row to a rowmap value.
    pub(crate) fn from_sql(value: ValueRef<'_>) -> Result<stmt::Value> {
        Ok(match value {
            ValueRef::Null => stmt::Value::Null,
            ValueRef::Integer(value) => stmt::Value::I64(value),
            ValueRef::Real(value) => stmt::Value::F64(value),
            ValueRef::Text(value) => stmt::Value::String(
                String::from_utf8(value.to_vec()).map_err(Error::driver_operation_failed)?,
            ),
            ValueRef::Blob(value) => stmt::Value::Bytes(value.to_vec()),
        })
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
