//! Library side of the `bom` command: configuration, logging and the
//! pipeline stages, shared by the binary and its integration tests.

pub mod config;
pub mod logging;
pub mod pipeline;
