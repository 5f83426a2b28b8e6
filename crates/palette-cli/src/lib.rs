//! Library components of the `palette` command.

pub mod config;
pub mod engine;
pub mod logging;
