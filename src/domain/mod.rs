//! Activity directory domain
//!
//! The typed activity record, the directory that owns every activity, the
//! startup dataset, and the errors the directory can raise.

pub mod activity;
pub mod directory;
pub mod error;
pub mod seed;

pub use activity::Activity;
pub use directory::ActivityDirectory;
pub use error::{DirectoryError, SeedError};
