//! TuneLotto CLI library.
//!
//! This crate provides the core functionality for the `tunelotto` binary:
//! input loading, the ticket batch file format, grid rendering and the
//! `generate`, `validate` and `check` commands.

pub mod batch;
pub mod commands;
pub mod input;
pub mod render;
