//! Core types shared across messfix facilities
//!
//! This crate holds the canonical schema constants used by both the error
//! facility and the logging facility, so that every structured event carries
//! the same field keys and event names.

pub mod schema;

/// Identifier of a box, folder or paper.
///
/// Ids are unique within one entity kind only: `P3` and `B3` are distinct.
pub type EntityId = u32;
