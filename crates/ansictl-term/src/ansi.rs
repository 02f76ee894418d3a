// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no buffering, no decisions about when to emit. This module just knows the
// byte-level encoding of the commands ansictl exposes.
//
// Cursor positions here are 1-indexed, as the terminal sees them, and 0 means
// "leave this axis alone". That matches how the markup tool's users think
// about rows and columns when scripting a screen.
//
// All functions return `io::Result` propagated from the underlying writer,
// except the erase commands, which can also reject a mode.
use std::io::{self, Write};

use crate::error::{Error, Result};

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor relative to its current position.
///
/// Negative `rows` move up (CUU), positive move down (CUD). Negative `cols`
/// move left (CUB), positive move right (CUF). Zero on an axis emits nothing
/// for that axis.
pub fn move_cursor(w: &mut impl Write, rows: i32, cols: i32) -> io::Result<()> {
    match rows.signum() {
        -1 => write!(w, "{CSI}{}A", rows.unsigned_abs())?,
        1 => write!(w, "{CSI}{rows}B")?,
        _ => {}
    }
    match cols.signum() {
        -1 => write!(w, "{CSI}{}D", cols.unsigned_abs()),
        1 => write!(w, "{CSI}{cols}C"),
        _ => Ok(()),
    }
}

/// Move the cursor to an absolute, 1-indexed position.
///
/// With both coordinates set this is CUP. With only `row` set it is VPA
/// (column unchanged); with only `col` set it is HPA (row unchanged).
pub fn move_cursor_to(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    match (row, col) {
        (0, 0) => Ok(()),
        (row, 0) => write!(w, "{CSI}{row}d"),
        (0, col) => write!(w, "{CSI}{col}`"),
        (row, col) => write!(w, "{CSI}{row};{col}H"),
    }
}

/// Move the cursor to the top left corner.
#[inline]
pub fn home(w: &mut impl Write) -> io::Result<()> {
    move_cursor_to(w, 1, 1)
}

/// Save the current cursor position (SCP).
#[inline]
pub fn save_cursor_position(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[s")
}

/// Restore the last saved cursor position (RCP).
#[inline]
pub fn restore_cursor_position(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[u")
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn hide_cursor(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn show_cursor(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// ─── Erase ───────────────────────────────────────────────────────────────────

/// Which part of the screen or line an erase command clears.
///
/// The discriminants are the parameter values sent to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// From the cursor to the end of the screen or line.
    ToEnd = 0,
    /// From the cursor to the beginning of the screen or line.
    ToBeginning = 1,
    /// The entire screen or line.
    All = 2,
    /// The scrollback buffer. Only valid for [`erase_in_display`].
    Scrollback = 3,
}

impl TryFrom<u8> for EraseMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::ToEnd),
            1 => Ok(Self::ToBeginning),
            2 => Ok(Self::All),
            3 => Ok(Self::Scrollback),
            n => Err(Error::UnknownEraseMode(n)),
        }
    }
}

/// Erase part of the screen (ED). The cursor does not move.
pub fn erase_in_display(w: &mut impl Write, mode: EraseMode) -> io::Result<()> {
    write!(w, "{CSI}{}J", mode as u8)
}

/// Erase part of the current line (EL). The cursor does not move.
///
/// # Errors
///
/// Returns [`Error::UnsupportedEraseMode`] for [`EraseMode::Scrollback`],
/// without writing anything, and [`Error::Io`] if the writer fails.
pub fn erase_in_line(w: &mut impl Write, mode: EraseMode) -> Result<()> {
    if mode == EraseMode::Scrollback {
        return Err(Error::UnsupportedEraseMode(mode));
    }
    write!(w, "{CSI}{}K", mode as u8)?;
    Ok(())
}

/// Clear the screen and move the cursor to the top left corner.
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    erase_in_display(w, EraseMode::All)?;
    home(w)
}

/// Clear the screen and the scrollback buffer, then move the cursor home.
pub fn reset_screen(w: &mut impl Write) -> io::Result<()> {
    erase_in_display(w, EraseMode::All)?;
    erase_in_display(w, EraseMode::Scrollback)?;
    home(w)
}

// ─── Scrolling ───────────────────────────────────────────────────────────────

/// Scroll the whole page by `n` lines.
///
/// Negative `n` scrolls down (SD, new lines appear at the top); positive `n`
/// scrolls up (SU, new lines appear at the bottom). Zero emits nothing.
pub fn scroll(w: &mut impl Write, n: i32) -> io::Result<()> {
    match n.signum() {
        -1 => write!(w, "{CSI}{}T", n.unsigned_abs()),
        1 => write!(w, "{CSI}{n}S"),
        _ => Ok(()),
    }
}

// ─── Alternate Screen ───────────────────────────────────────────────────────

/// Enter or leave the alternate screen buffer (DEC Private Mode 1049).
///
/// See <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html#h2-The-Alternate-Screen-Buffer>.
#[inline]
pub fn alternate_screen(w: &mut impl Write, enable: bool) -> io::Result<()> {
    if enable {
        w.write_all(b"\x1b[?1049h")
    } else {
        w.write_all(b"\x1b[?1049l")
    }
}

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Write one SGR sequence with the given `;`-separated parameter list.
///
/// The parameters are written verbatim; an empty list is the same as SGR 0
/// to the terminal.
#[inline]
pub fn sgr(w: &mut impl Write, params: &str) -> io::Result<()> {
    write!(w, "{CSI}{params}m")
}

/// Build an SGR sequence as a string. See [`sgr`].
#[must_use]
pub fn sgr_string(params: &str) -> String {
    format!("{CSI}{params}m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
