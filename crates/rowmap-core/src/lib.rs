#[macro_use]
mod macros;

pub mod driver;
pub use driver::{Connection, Statement, StatementHandle};

mod error;
pub use error::{Error, IntoError};

pub mod stmt;
pub use stmt::{Params, Primitive, Row, Value};

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
