//! Command-line front end for biosynth.
//!
//! Parses arguments ([`cli`]), runs the requested command ([`commands`])
//! and renders plain-text reports ([`report`]).

pub mod cli;
pub mod commands;
pub mod report;
