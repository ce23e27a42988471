//! Mongo Txn Patcher: transaction support for `jenssegers/mongodb`
//!
//! Patches the vendored `Connection.php` of the Laravel MongoDB driver so
//! that it can open a session and begin, commit, or roll back a
//! multi-document transaction, and removes that patch again on request.
//!
//! # Architecture
//!
//! A patch is a [`PatchSpec`]: two anchors and the extension that follows
//! each anchor once applied. Applying or reverting compiles down to two
//! [`Replacement`] passes, each a literal first-occurrence
//! search-and-replace over the whole file.
//!
//! # Limitations
//!
//! - Matching is byte-exact; a reformatted target makes a pass a silent no-op
//! - Files are rewritten in place with no backup and no locking
//! - Only the first occurrence of an anchor is considered
//!
//! # Example
//!
//! ```no_run
//! use mongo_txn_patcher::{apply, CONNECTION_PATH, TRANSACTION_PATCH};
//! use std::path::Path;
//!
//! match apply(Path::new(CONNECTION_PATH), &TRANSACTION_PATCH) {
//!     Ok(reports) => println!("Patched: {:?}", reports),
//!     Err(e) => eprintln!("Patch failed: {}", e),
//! }
//! ```

pub mod config;
pub mod edit;
pub mod patcher;

// Re-exports
pub use config::{Mode, PatchSpec, CONNECTION_PATH, TRANSACTION_PATCH};
pub use edit::{EditError, EditResult, Replacement};
pub use patcher::{apply, revert, run, PatchError, Step, StepReport};
