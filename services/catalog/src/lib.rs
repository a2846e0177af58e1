//! Game catalog service library crate.
//!
//! # Purpose
//! Exposes the catalog HTTP API, entity services, storage backends,
//! configuration and observability wiring for use by the binary and tests.
//!
//! # Notes
//! Requests flow `app` -> `api` controllers -> `service` -> `store`. Response
//! payload shapes live in `helpers`.
pub mod api;
pub mod app;
pub mod config;
pub mod helpers;
pub mod model;
pub mod observability;
pub mod service;
pub mod store;
