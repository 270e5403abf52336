//! The tools module provides helper pieces shared by the stages of the compressor.
//!
//! The tools are:
//! - cli: Command line interface and the options struct built from it.
//! - freq_count: Frequency table over dictionary indices.
//!
pub mod cli;
pub mod freq_count;
