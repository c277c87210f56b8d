//! Static vocabularies the editor offers.
//!
//! The tables here are compiled in and never change at runtime. Extend the
//! supported vocabulary by adding entries.

mod attributes;
mod tags;

pub use attributes::{ATTRIBUTES, is_known_attribute};
pub use tags::Tag;
