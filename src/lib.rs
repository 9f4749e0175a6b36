//! `macro-sentiment` library crate.
//!
//! The binary (`ms`) is a thin wrapper around this library so that:
//!
//! - the scoring engine is testable without spawning processes
//! - the engine can be embedded behind other front-ends (HTTP, notebooks, etc.)
//! - I/O, config and presentation stay out of the scoring code

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
pub mod score;
