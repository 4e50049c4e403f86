//! Filesystem primitives for config-sync
//!
//! Provides the byte-level file operations the reconciliation engine is built
//! on, plus atomic JSON persistence for configuration files.

pub mod config;
pub mod error;
pub mod io;
pub mod store;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use store::{BACKUP_MARKER, backup, copy_creating_dirs, exists, identical, is_backup_file, mtime};
