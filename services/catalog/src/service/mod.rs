//! Catalog entity services.
//!
//! # Purpose
//! One service per collection. Services own the existence and name-uniqueness
//! rules and report expected failures as `ServiceError::Rejected` values
//! carrying a tagged error message. Anything else the repository reports is
//! `ServiceError::Unexpected`.
//!
//! # Key invariants and assumptions
//! - Mutations run under a per-service lock, so a name check and the write
//!   that follows it are atomic with respect to other requests.
//! - Reads never take the write lock.
pub mod gamesystems;
pub mod videogames;

pub use gamesystems::GameSystemService;
pub use videogames::VideoGameService;

use crate::helpers::message::{ErrorMessage, build_error_message};
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("rejected: {}", .0.message)]
    Rejected(ErrorMessage),
    #[error(transparent)]
    Unexpected(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub(crate) fn reject(code: &str) -> ServiceError {
    ServiceError::Rejected(build_error_message(code))
}
