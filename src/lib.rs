//! # mkcpp - a tiny incremental C++ build driver
//!
//! mkcpp scans a source folder, recompiles each object file that is missing
//! or older than its source, and relinks the executable when any object is
//! newer than it. File modification times are the only build state.
//!
//! ## Quick Start
//!
//! ```bash
//! # Incremental build of src/*.cpp into build/ and bin/
//! mkcpp
//!
//! # Delete all object files first
//! mkcpp fresh
//! ```
//!
//! ## Module Organization
//!
//! - [`build`] - Target discovery, staleness checks, and command execution
//! - [`config`] - Build settings passed into every component

/// Target discovery, staleness checks, and the rebuild driver.
pub mod build;

/// Build configuration and verbosity.
pub mod config;
