//! Foundation types for the FOLIO portfolio terminal.
//!
//! This crate holds the host-agnostic types shared by every FOLIO crate:
//! key events from the input surface, terminal configuration, and the
//! error type.

pub mod config;
pub mod error;
pub mod input;
