//! Hetu-RS library
//!
//! Command definitions and output helpers behind the `hetu-rs` binary.

pub mod cli;
pub mod commands;
pub mod utils;
