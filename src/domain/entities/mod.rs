//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence logic.
//!
//! # Entity Types
//!
//! - [`Link`] - An alias mapped to a destination URL, with usage counters
//! - [`Stats`] - Aggregate totals over all links
//!
//! Creation and modification use separate input structs:
//! - [`NewLink`] - For inserting a new link
//! - [`LinkChanges`] - For replacing the editable fields of a link

pub mod link;
pub mod stats;

pub use link::{Link, LinkChanges, NewLink};
pub use stats::Stats;
