//! Domain entities for keyspan.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of the application is the **domain**.  Domain code has
//! no imports from terminals, file systems, or UI frameworks, and can be
//! tested in isolation on any platform.  Here it defines the keyboard table,
//! the rule for the keys between two keys, and the shape of a user's choices.
//!
//! Code in outer layers (the CLI session, rendering, configuration) depends on
//! the domain, but the domain never depends on them.

/// The fixed keyboard layout and row lookups.
///
/// See [`layout::Layout`] for the main type.
pub mod layout;

/// The between-span rule for two keys on the same row.
pub mod range;

/// Selections (from/to pairs) and the ordered list a front-end edits.
pub mod selection;
