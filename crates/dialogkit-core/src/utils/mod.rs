//! Utils module - Shared utilities and helpers
//!
//! Small independent helpers used across the conversational agent tooling.
//! None of them depend on each other beyond configuration lookups.

/// Kwarg splitting
pub mod args;

/// ANSI colored terminal output
pub mod color;

/// Interactive prompting and environment lookups
pub mod input;

/// Computed-once cached values
pub mod lazy;

/// Log levels, CLI flags and subscriber setup
pub mod logging;

/// Random subsampling of sequences
pub mod sampling;

/// String shortening, ids and number checks
pub mod text;

/// Waiting on worker threads
pub mod threads;
