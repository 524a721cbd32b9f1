mod entity;
pub use entity::{Entity, SelfPersistable};

pub mod mapper;
pub use mapper::Mapper;

mod record;
pub use record::Record;

mod related;
pub use related::Related;

pub mod driver {
    pub use rowmap_core::driver::*;

    #[cfg(feature = "sqlite")]
    pub use rowmap_driver_sqlite::Sqlite;
}

pub mod stmt {
    pub use rowmap_core::stmt::*;
}

pub use rowmap_core::{params, Error, Result};
pub use rowmap_macros::Entity;
pub use rowmap_sql::{Scheme, Statements, Table};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Entity, Result};
    pub use rowmap_core::stmt::{Params, Primitive, Value};
    pub use std::{default::Default, option::Option};
}
