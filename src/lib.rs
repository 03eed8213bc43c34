//! Core library exports for the inventory admin service.
//!
//! The `data` feature exposes the domain, persistence and repository layers.
//! The `server` feature adds forms, services, routes and the authentication
//! glue used by the Actix-web application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Roles allowed to open the dashboard form pages.
pub const SERVICE_ACCESS_ROLES: &[&str] = &["admin", "branch_manager"];
