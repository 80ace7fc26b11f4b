//! PARIS Studio CLI library.
//!
//! Argument definitions, session resolution and the command
//! implementations behind the `paris` binary.

pub mod cli_args;
pub mod commands;
pub mod config;
pub mod graph;
pub mod logging;
pub mod player;
