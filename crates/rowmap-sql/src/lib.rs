pub mod scheme;
pub use scheme::Scheme;

pub mod serializer;
pub use serializer::Serializer;

mod statements;
pub use statements::Statements;

mod table;
pub use table::Table;
