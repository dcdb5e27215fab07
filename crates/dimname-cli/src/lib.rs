//! DIM name generator CLI library.
//!
//! This crate provides the commands behind the `dimname` binary: asset
//! discovery, name entry, the official sprite bypass, and sprite output.

pub mod assets;
pub mod commands;
pub mod input;
