//! Utility functions shared across layers.
//!
//! - [`validation`] - Slug and destination URL validation

pub mod validation;
