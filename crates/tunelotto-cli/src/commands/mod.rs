//! CLI command implementations

pub mod check;
pub mod generate;
pub mod json_output;
pub mod validate;
