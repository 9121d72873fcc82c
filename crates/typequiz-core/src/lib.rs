//! typequiz-core — Quiz engine, scoring, and data model.
//!
//! This crate defines the question and type data model, loads it, and runs
//! the quiz state machine that turns answers into a four-letter type.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod source;
