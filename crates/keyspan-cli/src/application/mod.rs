//! Application layer for the keyspan terminal front-end.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules, here `keyspan_core`) and the infrastructure
//! (terminal, file system).  Code here orchestrates domain objects to fulfil
//! a user goal and performs no I/O of its own.
//!
//! # Sub-modules
//!
//! - **`session`** – Owns the selection list, applies one edit at a time and
//!   recomputes the result after each.  This is the "controller" that the
//!   core expects an outside collaborator to provide.
//!
//! - **`command`** – Parses interactive command lines and `FROM:TO` pair
//!   arguments into session events and selections.
//!
//! - **`render`** – Turns results, key lists and the layout into text or JSON
//!   for display.

pub mod command;
pub mod render;
pub mod session;
