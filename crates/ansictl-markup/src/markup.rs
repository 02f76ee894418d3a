// SPDX-License-Identifier: MIT
//
// Markup — the scanner/rewriter and its configuration in one value.
//
// A `Markup` owns the two pieces of configuration every rewrite depends on:
// the delimiter pair and the default colors. `parse` and `text` only read
// them, so a rewrite always sees the configuration as it was when the call
// started, and a string already rewritten is never affected by a later
// change. Independent `Markup` values share nothing.
//
// For the process-wide instance behind free functions, see `global`.

use std::io::Write;

use regex::Captures;

use ansictl_term::{Channel, Color};

use crate::defaults::DefaultColors;
use crate::delimiters::{Delimiters, Occurrence};
use crate::error::Result;
use crate::resolve::resolve;

/// Attribute markup configuration plus the rewrite operations over it.
///
/// # Examples
///
/// ```
/// use ansictl_markup::Markup;
///
/// let markup = Markup::new();
/// let s = "#[bd;fg red;bg 0,255,0]Hello, #[not bd;fg bright blue]World!#[]";
///
/// assert_eq!(
///     markup.parse(s),
///     "\x1b[1;38;5;1;48;2;0;255;0mHello, \x1b[22;38;5;12mWorld!\x1b[0m"
/// );
/// assert_eq!(markup.text(s), "Hello, World!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    delimiters: Delimiters,
    defaults: DefaultColors,
}

impl Markup {
    /// Default delimiters (`#[` / `]`), no default colors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A markup with the given delimiters and no default colors.
    ///
    /// # Errors
    ///
    /// See [`Delimiters::new`].
    pub fn with_delimiters(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            delimiters: Delimiters::new(start, end)?,
            defaults: DefaultColors::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    #[inline]
    #[must_use]
    pub const fn defaults(&self) -> &DefaultColors {
        &self.defaults
    }

    // ─── Rewriting ───────────────────────────────────────────────────────

    /// Replace every occurrence with its escape sequence.
    ///
    /// Text outside occurrences is copied unchanged. Occurrences whose
    /// clause has no valid instruction are removed.
    #[must_use]
    pub fn parse(&self, s: &str) -> String {
        self.delimiters
            .matcher()
            .replace_all(s, |caps: &Captures<'_>| {
                caps.get(1)
                    .map_or_else(String::new, |clause| resolve(clause.as_str(), &self.defaults))
            })
            .into_owned()
    }

    /// Remove every occurrence, delimiters included, and keep the rest.
    #[must_use]
    pub fn text(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut last = 0;
        for Occurrence { span, .. } in self.delimiters.occurrences(s) {
            out.push_str(&s[last..span.start]);
            last = span.end;
        }
        out.push_str(&s[last..]);
        out
    }

    // ─── Configuration ───────────────────────────────────────────────────

    /// Change the delimiters for subsequent calls. On error the previous
    /// delimiters stay in effect.
    ///
    /// # Errors
    ///
    /// See [`Delimiters::new`].
    pub fn set_attribute_delimiters(&mut self, start: &str, end: &str) -> Result<()> {
        self.delimiters = Delimiters::new(start, end)?;
        tracing::debug!(start, end, "attribute delimiters changed");
        Ok(())
    }

    /// Make `color` the default foreground and write its sequence to `w`.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `w`; the default is stored anyway.
    pub fn set_foreground_color(&mut self, color: Color, w: &mut impl Write) -> Result<()> {
        Ok(self.defaults.set(Channel::Foreground, color, w)?)
    }

    /// Make `color` the default background and write its sequence to `w`.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `w`; the default is stored anyway.
    pub fn set_background_color(&mut self, color: Color, w: &mut impl Write) -> Result<()> {
        Ok(self.defaults.set(Channel::Background, color, w)?)
    }

    /// Forget the default foreground and write SGR 39 to `w`.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `w`.
    pub fn reset_foreground_color(&mut self, w: &mut impl Write) -> Result<()> {
        Ok(self.defaults.reset(Channel::Foreground, w)?)
    }

    /// Forget the default background and write SGR 49 to `w`.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `w`.
    pub fn reset_background_color(&mut self, w: &mut impl Write) -> Result<()> {
        Ok(self.defaults.reset(Channel::Background, w)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::io;

    // ── Parse ───────────────────────────────────────────────────────────

    #[test]
    fn parse_examples() {
        let m = Markup::new();
        assert_eq!(m.parse("#[bd]"), "\x1b[1m");
        assert_eq!(m.parse("#[not bd]"), "\x1b[22m");
        assert_eq!(m.parse("#[]"), "\x1b[0m");
        assert_eq!(m.parse("#[fg red;bg 0,255,0]"), "\x1b[38;5;1;48;2;0;255;0m");
        assert_eq!(m.parse("#[fg bright blue]"), "\x1b[38;5;12m");
        assert_eq!(m.parse("#[fg #0F0]"), "\x1b[38;2;0;255;0m");
    }

    #[test]
    fn parse_drops_malformed_clause() {
        let m = Markup::new();
        assert_eq!(m.parse("#[zz]"), "");
        assert_eq!(m.parse("a#[zz]b"), "ab");
    }

    #[test]
    fn parse_keeps_surrounding_text() {
        let m = Markup::new();
        assert_eq!(
            m.parse("say #[it]hi#[not it] now"),
            "say \x1b[3mhi\x1b[23m now"
        );
    }

    #[test]
    fn parse_passes_unmatched_start_through() {
        let m = Markup::new();
        assert_eq!(m.parse("array#[0"), "array#[0");
        assert_eq!(m.parse("#[bd\n]x"), "#[bd\n]x");
    }

    #[test]
    fn parse_handles_dollar_in_text() {
        let m = Markup::new();
        assert_eq!(m.parse("$1 #[bd]$0"), "$1 \x1b[1m$0");
    }

    #[test]
    fn reset_reasserts_default_foreground() {
        let mut m = Markup::new();
        let mut out = Vec::new();
        m.set_foreground_color(Color::RED, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[38;5;1m");
        assert_eq!(m.parse("#[reset]"), "\x1b[0;38;5;1m");
        assert_eq!(m.parse("#[fg default]"), "\x1b[38;5;1m");
    }

    #[test]
    fn reset_color_restores_terminal_default() {
        let mut m = Markup::new();
        let mut out = Vec::new();
        m.set_background_color(Color::BLUE, &mut out).unwrap();
        m.reset_background_color(&mut out).unwrap();
        m.set_foreground_color(Color::RED, &mut out).unwrap();
        m.reset_foreground_color(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[48;5;4m\x1b[49m\x1b[38;5;1m\x1b[39m"
        );
        assert_eq!(m.parse("#[bg default;reset]"), "\x1b[49;0m");
    }

    // ── Text ────────────────────────────────────────────────────────────

    #[test]
    fn text_strips_markup() {
        let m = Markup::new();
        assert_eq!(m.text("#[bd]Hello#[]"), "Hello");
        assert_eq!(m.text("#[zz]x#[fg nope]y"), "xy");
        assert_eq!(m.text("keep #[ this"), "keep #[ this");
    }

    #[test]
    fn text_is_single_pass() {
        // Deleting `#[]` joins `#` and `[x]` into a new clause. One pass
        // leaves it alone; a second pass would remove it.
        let m = Markup::new();
        assert_eq!(m.text("##[][x]"), "#[x]");
    }

    // ── Delimiters ──────────────────────────────────────────────────────

    #[test]
    fn delimiter_change_affects_later_calls_only() {
        let mut m = Markup::new();
        let src = "<bd>#[ul]";
        let before = m.parse(src);

        m.set_attribute_delimiters("<", ">").unwrap();
        let after = m.parse(src);

        assert_eq!(before, "<bd>\x1b[4m");
        assert_eq!(after, "\x1b[1m#[ul]");
    }

    #[test]
    fn with_delimiters_constructor() {
        let m = Markup::with_delimiters("{", "}").unwrap();
        assert_eq!(m.delimiters().start(), "{");
        assert_eq!(m.text("{bd}x{}"), "x");
    }

    #[test]
    fn independent_instances_do_not_interfere() {
        let mut a = Markup::new();
        let b = Markup::new();
        a.set_foreground_color(Color::GREEN, &mut io::sink()).unwrap();
        a.set_attribute_delimiters("%{", "}").unwrap();

        assert_eq!(b.parse("#[]"), "\x1b[0m");
        assert_eq!(a.parse("%{}"), "\x1b[0;38;5;2m");
        assert_eq!(b.defaults().foreground(), None);
    }

    // ── Properties ──────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn no_markup_is_identity(s in "[^#]*") {
            let m = Markup::new();
            prop_assert_eq!(m.parse(&s), s.clone());
            prop_assert_eq!(m.text(&s), s);
        }

        #[test]
        fn text_is_idempotent(s in "(#\\[|\\]|[a-z; ]|\n){0,40}") {
            let m = Markup::new();
            let once = m.text(&s);
            prop_assert_eq!(m.text(&once), once.clone());
        }

        #[test]
        fn parse_and_text_agree_on_plain_content(
            parts in proptest::collection::vec(("[a-z ]{0,8}", "[a-z ;#,0-9]{0,12}"), 0..6)
        ) {
            let m = Markup::new();
            let mut src = String::new();
            let mut plain = String::new();
            for (text, clause) in &parts {
                src.push_str(text);
                src.push_str("#[");
                src.push_str(clause);
                src.push(']');
                plain.push_str(text);
            }
            prop_assert_eq!(m.text(&src), plain);
            let parsed = m.parse(&src);
            prop_assert_eq!(m.text(&parsed), parsed);
        }
    }
}
