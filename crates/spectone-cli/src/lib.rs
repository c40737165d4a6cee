//! Library side of the Spectone CLI.
//!
//! The binary in `main.rs` only parses arguments; the command
//! implementations live here so they can be integration-tested.

pub mod commands;
