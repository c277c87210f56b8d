//! Common utilities for the selkit selector editor.
//!
//! This crate provides shared infrastructure used by the selector core and
//! its front ends:
//! - **Warning System** - deduplicated, colored diagnostics that the editor
//!   layer can drain and display

pub mod warning;
