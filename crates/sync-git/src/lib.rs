//! Git support for config-sync
//!
//! Stages files that a pull copied into the sync repository and records them
//! in a commit. Everything runs in-process through libgit2.

pub mod commit;
pub mod error;
pub mod stage;

pub use commit::{CommitInfo, commit};
pub use error::{Error, Result};
pub use stage::stage;
