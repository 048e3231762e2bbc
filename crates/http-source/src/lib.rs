pub mod client;
pub mod error;
mod trait_impl;


pub use client::{HttpUserSource, DEFAULT_TIMEOUT_SECS, DEFAULT_USERS_URL};
pub use error::{HttpSourceError, Result};

// Re-export directory-core types for convenience
pub use directory_core::{DirectoryError, UserSource};
