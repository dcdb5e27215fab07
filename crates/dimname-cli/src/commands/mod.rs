//! CLI command implementations

pub mod doctor;
pub mod generate;
pub mod json_output;
