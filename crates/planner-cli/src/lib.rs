//! Planner CLI library.
//!
//! This crate provides the command-line interface and interactive REPL
//! for the event planner.

pub mod cli;
pub mod commands;
pub mod repl;
