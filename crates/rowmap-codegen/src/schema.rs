mod entity;
pub(crate) use entity::Entity;

mod error;
use error::ErrorSet;

mod field;
pub(crate) use field::Field;
