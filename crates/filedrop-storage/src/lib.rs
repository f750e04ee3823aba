//! Filedrop Storage Library
//!
//! This crate provides the upload destination abstraction and its implementations.
//! It includes the `Destination` trait, a discard sink and a directory-backed
//! destination.
//!
//! # Stored file names
//!
//! The directory destination never uses the client-supplied file name. Every upload
//! is written to `{save_dir}/{uuid}` where `uuid` is a fresh v4 UUID in simple
//! (32 hex characters, no hyphens) form. Names are validated before use so a
//! stored path always stays inside the save directory.

pub mod discard;
#[cfg(feature = "storage-directory")]
pub mod directory;
pub mod factory;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "storage-directory")]
pub use directory::DirectoryDestination;
pub use discard::DiscardDestination;
pub use factory::create_destination;
pub use filedrop_core::DestinationKind;
pub use traits::{Destination, StorageError, StorageResult, StoredUpload};
