//! drawlint core library.
//!
//! This crate exposes programmatic APIs for analyzing the draw callbacks of
//! compiled UI widget classes against a catalog of performance-risk rules.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `filter`: Glob-based class/package exclusion matching.
//! - `classify`: Widget classification heuristic and draw-callback catalog.
//! - `rules`: The rule catalog with per-category toggles.
//! - `scan`: Per-method instruction scanning and the per-class pipeline.
//! - `aggregate`: Thread-safe per-variant result store and summary projection.
//! - `models`: Data models for events, issues, results, and summaries.
//! - `output`: Human/JSON printers for analysis results.
pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod config;
pub mod filter;
pub mod models;
pub mod output;
pub mod rules;
pub mod scan;
