// simish/src/lib.rs
//! # Simish CLI Application
//!
//! This crate provides the command-line front end for the simish soft-match
//! engine: recording pairs, answering utterances, voting on matches and
//! evaluating a room.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
