// simish-core/src/engines/mod.rs
//! This module contains the concrete match engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `MatchEngine` trait. They share candidate selection and differ only in
//! how the raw lexical score is weighted.
//!
//! # License
//! MIT OR Apache-2.0

pub mod confidence_engine;
pub mod lexical_engine;
