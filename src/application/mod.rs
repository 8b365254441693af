//! Application layer services implementing business logic.
//!
//! Services coordinate validation and repository calls and give HTTP handlers
//! and the admin CLI one shared API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link management, redirect resolution and overview
pub mod services;
