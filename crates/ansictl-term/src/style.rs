// SPDX-License-Identifier: MIT
//
// Style table — the eight text styles the markup understands.
//
// Each style is an (enable, disable) pair of SGR parameters. Bold and faint
// share their disable code (22, "normal intensity"), which is how terminals
// define it; turning off one turns off both.

/// A text style as a pair of SGR parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// SGR parameter that turns the style on.
    pub enable: u8,
    /// SGR parameter that turns the style off.
    pub disable: u8,
}

impl Style {
    /// SGR 1 / 22 — increased intensity.
    pub const BOLD: Self = Self::new(1, 22);
    /// SGR 2 / 22 — decreased intensity.
    pub const FAINT: Self = Self::new(2, 22);
    /// SGR 3 / 23.
    pub const ITALIC: Self = Self::new(3, 23);
    /// SGR 4 / 24.
    pub const UNDERLINE: Self = Self::new(4, 24);
    /// SGR 5 / 25 — slow blink.
    pub const BLINK: Self = Self::new(5, 25);
    /// SGR 7 / 27 — swap foreground and background.
    pub const INVERSE: Self = Self::new(7, 27);
    /// SGR 9 / 29.
    pub const CROSSED_OUT: Self = Self::new(9, 29);
    /// SGR 53 / 55. Not supported everywhere.
    pub const OVERLINED: Self = Self::new(53, 55);

    /// Every style with its markup mnemonic, in table order.
    pub const ALL: [(&'static str, Self); 8] = [
        ("bd", Self::BOLD),
        ("ft", Self::FAINT),
        ("it", Self::ITALIC),
        ("ul", Self::UNDERLINE),
        ("bk", Self::BLINK),
        ("iv", Self::INVERSE),
        ("co", Self::CROSSED_OUT),
        ("ol", Self::OVERLINED),
    ];

    #[inline]
    #[must_use]
    pub const fn new(enable: u8, disable: u8) -> Self {
        Self { enable, disable }
    }

    /// Look up a style by its two-letter mnemonic (`bd`, `ul`, ...).
    #[must_use]
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(m, _)| *m == mnemonic)
            .map(|&(_, style)| style)
    }

    /// The enable parameter as a decimal string.
    #[must_use]
    pub fn enable_code(self) -> String {
        self.enable.to_string()
    }

    /// The disable parameter as a decimal string.
    #[must_use]
    pub fn disable_code(self) -> String {
        self.disable.to_string()
    }

    /// The enable or disable parameter, picked by `on`.
    #[must_use]
    pub fn code(self, on: bool) -> String {
        if on { self.enable_code() } else { self.disable_code() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_codes() {
        let codes: Vec<(u8, u8)> = Style::ALL
            .iter()
            .map(|(_, s)| (s.enable, s.disable))
            .collect();
        assert_eq!(
            codes,
            [(1_u8, 22_u8), (2, 22), (3, 23), (4, 24), (5, 25), (7, 27), (9, 29), (53, 55)]
        );
    }

    #[test]
    fn mnemonic_lookup() {
        assert_eq!(Style::from_mnemonic("bd"), Some(Style::BOLD));
        assert_eq!(Style::from_mnemonic("ol"), Some(Style::OVERLINED));
        assert_eq!(Style::from_mnemonic("zz"), None);
        assert_eq!(Style::from_mnemonic("BD"), None);
        assert_eq!(Style::from_mnemonic(""), None);
    }

    #[test]
    fn codes_as_strings() {
        assert_eq!(Style::OVERLINED.enable_code(), "53");
        assert_eq!(Style::BOLD.disable_code(), "22");
        assert_eq!(Style::ITALIC.code(true), "3");
        assert_eq!(Style::ITALIC.code(false), "23");
    }
}
