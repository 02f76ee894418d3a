// SPDX-License-Identifier: MIT
//
// Default-color state.
//
// The library's notion of "default" foreground and background, as opposed
// to the terminal's. Unset means "whatever the terminal uses". The resolver
// only reads this; the four mutators below are the only way it changes, and
// each one also writes the matching SGR sequence so the terminal agrees with
// the state from that point on.

use std::io::{self, Write};

use ansictl_term::ansi;
use ansictl_term::{Channel, Color, Paint};

/// Optional default colors for both channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultColors {
    foreground: Option<Color>,
    background: Option<Color>,
}

impl DefaultColors {
    /// Both channels unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    #[inline]
    #[must_use]
    pub const fn background(&self) -> Option<Color> {
        self.background
    }

    /// The default for one channel.
    #[inline]
    #[must_use]
    pub const fn get(&self, channel: Channel) -> Option<Color> {
        match channel {
            Channel::Foreground => self.foreground,
            Channel::Background => self.background,
        }
    }

    /// SGR parameters that put `channel` back to its default: the stored
    /// color if there is one, else the terminal reset code (39 / 49).
    #[must_use]
    pub fn code(&self, channel: Channel) -> String {
        self.get(channel).map_or_else(
            || channel.default_code().to_owned(),
            |color| color.code(channel),
        )
    }

    /// Store `color` as the default for `channel` and write its sequence.
    ///
    /// The state changes even if the write fails.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `w`.
    pub fn set(&mut self, channel: Channel, color: Color, w: &mut impl Write) -> io::Result<()> {
        *self.slot(channel) = Some(color);
        tracing::debug!(?channel, %color, "default color set");
        ansi::sgr(w, &color.code(channel))
    }

    /// Clear the default for `channel` and write the terminal reset code.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `w`.
    pub fn reset(&mut self, channel: Channel, w: &mut impl Write) -> io::Result<()> {
        *self.slot(channel) = None;
        tracing::debug!(?channel, "default color reset");
        ansi::sgr(w, channel.default_code())
    }

    fn slot(&mut self, channel: Channel) -> &mut Option<Color> {
        match channel {
            Channel::Foreground => &mut self.foreground,
            Channel::Background => &mut self.background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_unset() {
        let d = DefaultColors::new();
        assert_eq!(d.foreground(), None);
        assert_eq!(d.background(), None);
        assert_eq!(d, DefaultColors::default());
    }

    #[test]
    fn set_stores_and_emits() {
        let mut d = DefaultColors::new();
        let mut out = Vec::new();
        d.set(Channel::Foreground, Color::RED, &mut out).unwrap();
        d.set(Channel::Background, Color::rgb(1, 2, 3), &mut out).unwrap();

        assert_eq!(d.foreground(), Some(Color::RED));
        assert_eq!(d.background(), Some(Color::rgb(1, 2, 3)));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[38;5;1m\x1b[48;2;1;2;3m"
        );
    }

    #[test]
    fn reset_clears_and_emits() {
        let mut d = DefaultColors::new();
        let mut out = Vec::new();
        d.set(Channel::Background, Color::BLUE, &mut out).unwrap();
        out.clear();

        d.reset(Channel::Background, &mut out).unwrap();
        d.reset(Channel::Foreground, &mut out).unwrap();

        assert_eq!(d.background(), None);
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[49m\x1b[39m");
    }

    #[test]
    fn code_falls_back_to_terminal_default() {
        let mut d = DefaultColors::new();
        assert_eq!(d.code(Channel::Foreground), "39");
        assert_eq!(d.code(Channel::Background), "49");

        d.set(Channel::Foreground, Color::GREEN, &mut io::sink()).unwrap();
        assert_eq!(d.code(Channel::Foreground), "38;5;2");
        assert_eq!(d.code(Channel::Background), "49");
    }
}
