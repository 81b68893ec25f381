//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod profile_repo;
mod memory_store;


pub use traits::ProfileStore;
pub use db::init_db;
pub use profile_repo::SqliteProfileStore;
pub use memory_store::InMemoryProfileStore;
