mod params;
pub use params::Params;

mod primitive;
pub use primitive::Primitive;

mod row;
pub use row::Row;

mod value;
pub use value::Value;
