//! Response-shaping helpers shared by services and controllers.
//!
//! # Purpose
//! `message` builds the uniform `{message}` / `{error, message}` payloads, and
//! `controller` builds generic 500 bodies and normalizes error values into a
//! single loggable string.
pub mod controller;
pub mod message;
