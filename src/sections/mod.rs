//! Password evaluation sections
//!
//! Each section checks one aspect of the candidate and reports the
//! requirements it leaves unmet.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

use crate::strength::Requirement;

/// Unmet requirements reported by a section, in display order.
/// An empty vector means the section passed.
pub type SectionResult = Vec<Requirement>;
