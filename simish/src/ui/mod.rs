// simish/src/ui/mod.rs
//! Terminal rendering helpers for the simish CLI.

pub mod match_table;
pub mod output_format;
