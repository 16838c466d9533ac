// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Errors returned when sizing a filter.
use thiserror::Error;

/// Result type for filter construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a filter refuses to be constructed.
///
/// Once built, a filter cannot fail: inserting and querying are total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A sizing parameter is outside its domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// The computed bit vector cannot be addressed on this platform.
    #[error("filter of {bits} bits is too large")]
    TooLarge {
        /// Requested number of bits, before any truncation.
        bits: f64,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
