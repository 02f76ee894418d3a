// SPDX-License-Identifier: MIT
//
// Error type for ansictl-term.
//
// The emitters can only fail on I/O or when handed an erase mode the target
// command does not define. Color parsing reports which part of the
// specification was rejected so command-line callers get a usable message.
// The markup parser swallows all of these: it converts a failed color parse
// into "no output" and never shows the error to anyone.

use std::io;

use thiserror::Error;

use crate::ansi::EraseMode;

/// Errors produced by emitters and color parsing.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing to the underlying sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The erase mode exists but the command does not accept it
    /// (erase-in-line has no scrollback mode).
    #[error("erase mode {0:?} is not supported by erase in line")]
    UnsupportedEraseMode(EraseMode),

    /// A numeric erase mode outside `0..=3`.
    #[error("unknown erase mode: {0}")]
    UnknownEraseMode(u8),

    /// `#` followed by something other than 3 or 6 hex digits.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A comma-separated triple that is not three integers in `0..=255`.
    #[error("invalid RGB color: {0:?}")]
    InvalidRgb(String),

    /// A name outside black, red, green, yellow, blue, magenta, cyan, white.
    #[error("unknown color name: {0:?}")]
    UnknownColorName(String),

    /// A color specification with the wrong number or shape of fields.
    #[error("malformed color specification: {0:?}")]
    MalformedColor(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
