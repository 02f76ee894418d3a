// SPDX-License-Identifier: MIT
//
// Attribute delimiters and the matcher derived from them.
//
// An occurrence is `start`, then the shortest run of text that reaches the
// first `end`, then `end`. The matcher is a non-greedy regex built from the
// escaped delimiters and rebuilt whenever they change, so no stale matcher
// can outlive a reconfiguration. Like `.` in the pattern, a clause never
// crosses a line break: `#[bd\n]` is plain text.

use std::ops::Range;

use regex::Regex;

use crate::error::{Error, Result};

/// Default start delimiter.
pub const DEFAULT_START: &str = "#[";

/// Default end delimiter.
pub const DEFAULT_END: &str = "]";

/// One delimited attribute clause found in an input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// Byte span from the first byte of `start` to just past `end`.
    pub span: Range<usize>,
    /// The text between the delimiters.
    pub clause: &'a str,
}

/// A start/end delimiter pair with its compiled matcher.
#[derive(Debug, Clone)]
pub struct Delimiters {
    start: String,
    end: String,
    matcher: Regex,
}

impl Delimiters {
    /// Build a delimiter pair.
    ///
    /// Empty delimiters are accepted. An empty pair matches the empty string
    /// at every position, which is legal but rarely useful.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Delimiters`] if the matcher cannot be compiled,
    /// which in practice only happens when the delimiters are so long that
    /// the pattern exceeds the regex size limit.
    pub fn new(start: &str, end: &str) -> Result<Self> {
        let pattern = format!("{}(.*?){}", regex::escape(start), regex::escape(end));
        let matcher = Regex::new(&pattern).map_err(|source| Error::Delimiters {
            start: start.to_owned(),
            end: end.to_owned(),
            source,
        })?;
        Ok(Self {
            start: start.to_owned(),
            end: end.to_owned(),
            matcher,
        })
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// The compiled matcher. Capture group 1 is the clause.
    #[inline]
    #[must_use]
    pub const fn matcher(&self) -> &Regex {
        &self.matcher
    }

    /// All occurrences in `s`, left to right, non-overlapping.
    pub fn occurrences<'a>(&'a self, s: &'a str) -> impl Iterator<Item = Occurrence<'a>> + 'a {
        self.matcher.captures_iter(s).filter_map(|caps| {
            let whole = caps.get(0)?;
            let clause = caps.get(1)?;
            Some(Occurrence {
                span: whole.range(),
                clause: clause.as_str(),
            })
        })
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        let pattern = format!(
            "{}(.*?){}",
            regex::escape(DEFAULT_START),
            regex::escape(DEFAULT_END)
        );
        Self {
            start: DEFAULT_START.to_owned(),
            end: DEFAULT_END.to_owned(),
            matcher: Regex::new(&pattern).expect("escaped default delimiters always compile"),
        }
    }
}

impl PartialEq for Delimiters {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Delimiters {}
