use super::Value;
use crate::{Error, Result};

/// A Rust type that can be stored in a single column.
///
/// Entity fields are converted with `to_value` when they are bound as
/// statement parameters and rebuilt with `load` when a row is hydrated.
pub trait Primitive: Sized {
    /// Rebuilds the Rust value from a column value.
    fn load(value: Value) -> Result<Self>;

    /// Converts the Rust value into a parameter value.
    fn to_value(&self) -> Value;
}

impl Primitive for Value {
    fn load(value: Value) -> Result<Self> {
        Ok(value)
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl Primitive for bool {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // Stores without a boolean type keep 0/1 integers.
            Value::I64(0) => Ok(false),
            Value::I64(1) => Ok(true),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_primitive_int {
    ( $($t:ty),+ ) => {
        $(
            impl Primitive for $t {
                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => <$t>::try_from(v)
                            .map_err(|_| Error::type_conversion(Value::I64(v), stringify!($t))),
                        value => Err(Error::type_conversion(value, stringify!($t))),
                    }
                }

                fn to_value(&self) -> Value {
                    Value::I64(*self as i64)
                }
            }
        )+
    };
}

impl_primitive_int!(i8, i16, i32, i64, u8, u16, u32);

impl Primitive for f64 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for String {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}
