//! Execution modes
//!
//! The service only has a server mode.

pub mod server;

pub use server::run_server;
