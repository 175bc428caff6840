//! CLI command implementations.

pub mod failoverlog;
pub mod snapshot;
