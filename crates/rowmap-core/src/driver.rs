//! The database driver collaborator.
//!
//! A driver compiles SQL text into [`Statement`]s and reports the key the
//! storage engine generated for the last inserted row. Everything else
//! (pooling, transactions, timeouts) stays with the driver or the caller.

mod connection;
pub use connection::Connection;

mod handle;
pub use handle::StatementHandle;

mod statement;
pub use statement::Statement;
