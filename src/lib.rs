//! rerender-audit core library.
//!
//! This crate scans React component source text for patterns that cause
//! unnecessary re-renders. It is a text scanner, not a parser: findings are
//! heuristic by nature.
//!
//! High-level modules:
//! - `scan`: String-aware brace matching and text-position helpers.
//! - `components`: Component boundary extraction built on `scan`.
//! - `detectors`: The ordered rule pipeline producing issues.
//! - `aggregate`: Severity filtering and per-file summaries.
//! - `audit`: Per-file and parallel multi-file runners.
//! - `discover`: File discovery with extension and directory filters.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `models`: Data models for components, issues, summaries, and reports.
//! - `output`: Human/JSON printers.
//! - `error`: Error type for the discovery and configuration boundary.
pub mod aggregate;
pub mod audit;
pub mod cli;
pub mod components;
pub mod config;
pub mod detectors;
pub mod discover;
pub mod error;
pub mod models;
pub mod output;
pub mod scan;
