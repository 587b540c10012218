//! Public surface for the `mitra-server` crate.
//!
//! Exposes the router builder and config types so that external crates
//! (e.g. the conformance test suite) can spin up an in-process server without
//! spawning a subprocess.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

pub use config::ServerConfig;
pub use router::build_router;
