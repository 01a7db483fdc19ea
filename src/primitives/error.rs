//! Errors from creating components.

use thiserror::Error;

use crate::canvas::RegistrationError;

/// Failure to create a component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Another live component already uses this ID.
    #[error("Component id already in use: {0}")]
    DuplicateId(String),
    /// Setup failed to register with a canvas host.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}
