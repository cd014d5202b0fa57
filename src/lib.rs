//! Core library for the `abreport` CLI.
//!
//! The binary benchmarks each configured endpoint with ApacheBench, parses
//! the tool's text report, charts the connection-time table and assembles
//! everything into a single PDF. The modules here are the building blocks of
//! that pipeline; the command-line application is the primary interface.
pub mod args;
pub mod bench;
pub mod charts;
pub mod config;
pub mod domain;
pub mod entry;
pub mod error;
pub mod logger;
pub mod parser;
pub mod pipeline;
pub mod report;

#[cfg(test)]
mod test_support;
