//! Shared test utilities for the config-sync workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not each
//! rebuild the same local/repo directory pair. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`env`]: [`TestEnv`](env::TestEnv) with a local side, a project and a sync repo
//! - [`git`]: git repository fixtures

pub mod env;
pub mod git;

pub use env::{TEST_MACHINE, TestEnv};
