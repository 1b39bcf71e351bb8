//! Service layer for section titles.
//! - `storage`: the configuration blob store abstraction and its backends.
//! - `sections`: list operations (lookup, upsert, renumber) and the service
//!   the HTTP layer talks to.
//! - Store handles are passed in explicitly; nothing here is global.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod sections;
