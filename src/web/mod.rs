//! Web layer: HTML pages, form handling and alias redirects.
//!
//! Pages are rendered server-side with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Request handlers and page templates
//! - [`forms`] - Form payloads, including the `_method` override
//! - [`views`] - Display models passed to templates
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
