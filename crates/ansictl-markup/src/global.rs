// SPDX-License-Identifier: MIT
//
// Process-wide markup instance.
//
// Scripts and small tools want `parse("#[bd]...")` without threading a
// `Markup` through every call. These functions operate on one shared
// instance that starts with the default delimiters and no default colors.
//
// The instance sits behind an `RwLock`: configuration calls take the write
// lock and rewrites take the read lock, so a delimiter or color change is
// ordered entirely before or entirely after any concurrent `parse`. The
// usual advice still applies: configure once at startup, then only read.
// A panic while holding the lock cannot leave the configuration half
// written (every mutation is a single assignment), so a poisoned lock is
// recovered instead of propagated.
//
// The color mutators write to stdout, locking it for the one sequence.

use std::io;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ansictl_term::Color;

use crate::error::Result;
use crate::markup::Markup;

static MARKUP: LazyLock<RwLock<Markup>> = LazyLock::new(|| RwLock::new(Markup::new()));

fn read() -> RwLockReadGuard<'static, Markup> {
    MARKUP.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Markup> {
    MARKUP.write().unwrap_or_else(PoisonError::into_inner)
}

/// A copy of the current process-wide configuration.
#[must_use]
pub fn snapshot() -> Markup {
    read().clone()
}

/// [`Markup::parse`] with the process-wide configuration.
#[must_use]
pub fn parse(s: &str) -> String {
    read().parse(s)
}

/// [`Markup::text`] with the process-wide configuration.
#[must_use]
pub fn text(s: &str) -> String {
    read().text(s)
}

/// [`Markup::set_attribute_delimiters`] on the process-wide configuration.
///
/// # Errors
///
/// See [`Markup::set_attribute_delimiters`].
pub fn set_attribute_delimiters(start: &str, end: &str) -> Result<()> {
    write().set_attribute_delimiters(start, end)
}

/// Set the process-wide default foreground and write it to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails; the default is stored anyway.
pub fn set_foreground_color(color: Color) -> Result<()> {
    write().set_foreground_color(color, &mut io::stdout().lock())
}

/// Set the process-wide default background and write it to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails; the default is stored anyway.
pub fn set_background_color(color: Color) -> Result<()> {
    write().set_background_color(color, &mut io::stdout().lock())
}

/// Clear the process-wide default foreground and write SGR 39 to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn reset_foreground_color() -> Result<()> {
    write().reset_foreground_color(&mut io::stdout().lock())
}

/// Clear the process-wide default background and write SGR 49 to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn reset_background_color() -> Result<()> {
    write().reset_background_color(&mut io::stdout().lock())
}
