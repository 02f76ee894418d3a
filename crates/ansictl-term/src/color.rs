// SPDX-License-Identifier: MIT
//
// ansictl color model — palette indices and 24-bit RGB, rendered as SGR.
//
// A terminal cell has two color slots, foreground and background, and each
// can be set either by 256-color palette index (`38;5;N` / `48;5;N`) or by
// an explicit RGB triple (`38;2;R;G;B` / `48;2;R;G;B`). "Use the terminal's
// own default" is not a color here; callers model it as `Option<Color>` and
// emit the channel's reset code (39 / 49) for `None`.
//
// Named colors are palette indices: the eight base colors are 0–7 in the
// order black, red, green, yellow, blue, magenta, cyan, white, and their
// bright variants are the same index + 8. They are always emitted in the
// extended `38;5;N` form, never the compact 30–37 / 90–97 codes, so a color
// renders the same way whether it came from a name or a number.
//
// Parsing follows the markup color grammar:
//
//   #RGB | #RRGGBB         hex, 3-digit form doubles each digit
//   R,G,B                  decimal, each 0–255
//   N                      decimal palette index, 0–255
//   <name>                 base color
//   bright <name>          bright color

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

// ─── Color ───────────────────────────────────────────────────────────────────

/// A terminal color: a 256-color palette index or a 24-bit RGB triple.
///
/// # Examples
///
/// ```
/// use ansictl_term::color::{Color, Paint};
///
/// assert_eq!(Color::RED.foreground(), "38;5;1");
/// assert_eq!(Color::rgb(0, 255, 0).background(), "48;2;0;255;0");
///
/// let green: Color = "#0F0".parse().unwrap();
/// assert_eq!(green, Color::Rgb(0, 255, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// ANSI 256-color palette index.
    Indexed(u8),

    /// 24-bit `TrueColor`.
    Rgb(u8, u8, u8),
}

/// Base color names in palette order.
pub const COLOR_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const RED: Self = Self::Indexed(1);
    pub const GREEN: Self = Self::Indexed(2);
    pub const YELLOW: Self = Self::Indexed(3);
    pub const BLUE: Self = Self::Indexed(4);
    pub const MAGENTA: Self = Self::Indexed(5);
    pub const CYAN: Self = Self::Indexed(6);
    pub const WHITE: Self = Self::Indexed(7);
    pub const BRIGHT_BLACK: Self = Self::Indexed(8);
    pub const BRIGHT_RED: Self = Self::Indexed(9);
    pub const BRIGHT_GREEN: Self = Self::Indexed(10);
    pub const BRIGHT_YELLOW: Self = Self::Indexed(11);
    pub const BRIGHT_BLUE: Self = Self::Indexed(12);
    pub const BRIGHT_MAGENTA: Self = Self::Indexed(13);
    pub const BRIGHT_CYAN: Self = Self::Indexed(14);
    pub const BRIGHT_WHITE: Self = Self::Indexed(15);

    // ─── Constructors ────────────────────────────────────────────────────

    /// A 24-bit color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// A palette color.
    #[inline]
    #[must_use]
    pub const fn indexed(idx: u8) -> Self {
        Self::Indexed(idx)
    }

    /// Look up one of the eight color names, optionally its bright variant.
    ///
    /// Names are case-sensitive. Returns `None` for anything else.
    #[must_use]
    pub fn named(name: &str, bright: bool) -> Option<Self> {
        let idx = COLOR_NAMES.iter().position(|&n| n == name)?;
        #[allow(clippy::cast_possible_truncation)]
        let idx = idx as u8;
        Some(Self::Indexed(if bright { idx + 8 } else { idx }))
    }

    /// Parse the fields of a color specification, already split on spaces.
    ///
    /// One field is a hex color, an `R,G,B` triple, a palette index or a
    /// name; two fields must be `bright <name>`.
    ///
    /// # Errors
    ///
    /// Returns the variant of [`Error`] naming the form that was rejected.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        match *fields {
            [spec] => {
                if let Some(hex) = spec.strip_prefix('#') {
                    parse_hex(hex).ok_or_else(|| Error::InvalidHex(spec.to_owned()))
                } else if spec.contains(',') {
                    parse_rgb(spec).ok_or_else(|| Error::InvalidRgb(spec.to_owned()))
                } else if is_decimal(spec) {
                    spec.parse()
                        .map(Self::Indexed)
                        .map_err(|_| Error::MalformedColor(spec.to_owned()))
                } else {
                    Self::named(spec, false)
                        .ok_or_else(|| Error::UnknownColorName(spec.to_owned()))
                }
            }
            ["bright", name] => {
                Self::named(name, true).ok_or_else(|| Error::UnknownColorName(name.to_owned()))
            }
            _ => Err(Error::MalformedColor(fields.join(" "))),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a color specification such as `red`, `bright blue`, `#0f0`,
    /// `10,20,30` or `196`. Fields are separated by single spaces.
    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(' ').collect();
        Self::from_fields(&fields)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Indexed(idx) => write!(f, "ansi({idx})"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── Channel ─────────────────────────────────────────────────────────────────

/// One of the two color slots of a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Foreground,
    Background,
}

impl Channel {
    /// Map the markup keywords `fg` and `bg` to a channel.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "fg" => Some(Self::Foreground),
            "bg" => Some(Self::Background),
            _ => None,
        }
    }

    /// SGR parameter that returns this channel to the terminal's default.
    #[inline]
    #[must_use]
    pub const fn default_code(self) -> &'static str {
        match self {
            Self::Foreground => "39",
            Self::Background => "49",
        }
    }
}

// ─── Paint ───────────────────────────────────────────────────────────────────

/// Something that can be rendered as SGR color parameters.
///
/// The returned strings are parameter lists without the `ESC [` prefix or
/// the `m` terminator, ready to be joined with other parameters by `;`.
pub trait Paint {
    /// SGR parameters selecting this as the foreground color.
    fn foreground(&self) -> String;

    /// SGR parameters selecting this as the background color.
    fn background(&self) -> String;

    /// SGR parameters for the given channel.
    fn code(&self, channel: Channel) -> String {
        match channel {
            Channel::Foreground => self.foreground(),
            Channel::Background => self.background(),
        }
    }
}

impl Paint for Color {
    fn foreground(&self) -> String {
        match *self {
            Self::Indexed(idx) => format!("38;5;{idx}"),
            Self::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
        }
    }

    fn background(&self) -> String {
        match *self {
            Self::Indexed(idx) => format!("48;5;{idx}"),
            Self::Rgb(r, g, b) => format!("48;2;{r};{g};{b}"),
        }
    }
}

// ─── Parsing Helpers ─────────────────────────────────────────────────────────

/// Parse 3 or 6 hex digits (without `#`) into an RGB color.
fn parse_hex(s: &str) -> Option<Color> {
    let bytes = s.as_bytes();

    match bytes.len() {
        // RGB: each digit doubled, so F becomes FF
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::Rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Parse `R,G,B` with each component a plain decimal in `0..=255`.
fn parse_rgb(s: &str) -> Option<Color> {
    let mut parts = s.split(',');
    let r = parse_component(parts.next()?)?;
    let g = parse_component(parts.next()?)?;
    let b = parse_component(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::Rgb(r, g, b))
}

fn parse_component(s: &str) -> Option<u8> {
    if is_decimal(s) { s.parse().ok() } else { None }
}

/// Non-empty and ASCII digits only. `u8::from_str` would also take a `+`.
fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
