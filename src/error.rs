//! Error types for fallible construction and configuration paths.
//!
//! Navigation and interaction never fail; they report `bool` instead.

use thiserror_no_std::Error;

/// Errors raised while building widget trees or loading configuration
#[derive(Debug, Error)]
pub enum Error {
    /// A container already holds as many children as its capacity allows
    #[error("Container full (capacity: {capacity})")]
    ContainerFull {
        /// Compile-time child capacity of the container
        capacity: usize,
    },

    /// A command line exceeded the decoder's line buffer
    #[error("Command line too long (capacity: {capacity})")]
    LineTooLong {
        /// Size of the line buffer in bytes
        capacity: usize,
    },

    /// A command line did not name a known command
    #[error("Unknown command")]
    UnknownCommand,

    /// Serialized configuration could not be encoded or decoded
    #[error("Invalid configuration: {0}")]
    Config(postcard::Error),
}

/// Result type for toolkit operations
pub type Result<T> = core::result::Result<T, Error>;
