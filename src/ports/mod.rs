//! Port traits the shell depends on.

pub mod config_port;
pub mod market_port;
