//! Infrastructure layer for the keyspan terminal front-end.
//!
//! Contains the I/O-facing adapters: the configuration file and the
//! line-oriented interactive console.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `keyspan_core`, but MUST NOT be imported by the `application` layer.

pub mod console;
pub mod storage;
