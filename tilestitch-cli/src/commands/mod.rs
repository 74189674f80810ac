//! CLI subcommand implementations.

pub mod cache;
pub mod common;
pub mod config;
pub mod inspect;
pub mod render;
