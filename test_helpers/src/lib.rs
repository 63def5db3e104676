//! Test helpers shared across crates.
//!
//! This crate provides an in-memory output sink and argument-list builders.

pub mod argv;
pub mod output;
