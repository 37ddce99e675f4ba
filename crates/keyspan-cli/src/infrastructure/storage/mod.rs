//! Storage infrastructure: configuration file access.
//!
//! The `config` sub-module handles:
//!
//! - Reading the TOML configuration file from an explicit path or the
//!   platform-appropriate directory.
//! - Writing a default file on request (`keyspan config --init`).
//! - Providing defaults when no file exists yet.
//!
//! Only display and logging preferences live here.  Selections are never
//! written to disk.

pub mod config;
