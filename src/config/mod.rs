pub mod connection;
pub mod schema;

pub use connection::{CONNECTION_PATH, TRANSACTION_PATCH};
pub use schema::{Mode, PatchSpec};
