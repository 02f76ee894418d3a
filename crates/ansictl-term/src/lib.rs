// SPDX-License-Identifier: MIT
//
// ansictl-term — the terminal-facing half of ansictl.
//
// Everything here is either data or a one-shot writer: the byte-level
// encoding of cursor, erase, scroll and alternate-screen commands, the SGR
// codes for the eight text styles, and the color model that renders indexed
// and 24-bit colors as SGR parameters. The markup parser in ansictl-markup
// consumes these; it never hard-codes a numeric code of its own.
//
// No terminal state is tracked and nothing is buffered. Every emitter takes
// an `impl Write` so callers decide where the bytes go.

pub mod ansi;
pub mod color;
pub mod error;
pub mod style;

pub use color::{Channel, Color, Paint};
pub use error::{Error, Result};
pub use style::Style;
