// Licensed under the Apache-2.0 license

//! Errors raised while constructing a register map.
//!
//! Both variants are programmer-error-class failures: they are raised
//! synchronously at append time and never deferred to render time. A failed
//! append leaves the [`RegisterList`](crate::RegisterList) unchanged.

use thiserror::Error;

/// Errors that can occur when building a register map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterMapError {
    /// A register with this name already exists in the list.
    #[error("register {name:?} is already defined in register list {list:?}")]
    DuplicateName { list: String, name: String },

    /// The mode code is not one of the closed set of register modes.
    #[error("unknown register mode {mode:?}")]
    InvalidMode { mode: String },
}

/// Result type for register map construction.
pub type Result<T> = core::result::Result<T, RegisterMapError>;
