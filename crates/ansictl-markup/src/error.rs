// SPDX-License-Identifier: MIT
//
// Error type for ansictl-markup.
//
// Parsing markup never fails. Errors only come from configuration (a
// delimiter pair the matcher cannot be built from) and from writing the
// default-color sequences to a sink.

use std::io;

use thiserror::Error;

/// Errors from configuring or driving a [`Markup`](crate::Markup).
#[derive(Error, Debug)]
pub enum Error {
    /// The delimiter pair could not be compiled into a matcher.
    #[error("invalid attribute delimiters {start:?} / {end:?}: {source}")]
    Delimiters {
        start: String,
        end: String,
        #[source]
        source: regex::Error,
    },

    /// Writing an escape sequence failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
