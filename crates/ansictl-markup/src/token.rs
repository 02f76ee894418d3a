// SPDX-License-Identifier: MIT
//
// Tokenizer and classifier for attribute clauses.
//
// A clause is split on `;` into tokens, and each token on single spaces
// into fields. Splitting on every space, not on runs of spaces, is what the
// markup has always done: `fg  red` has an empty middle field and is not a
// color. Tokens with more than three fields never match a rule.
//
// Classification, first match wins:
//
//   1. ""  | "reset"                      → Reset
//   2. <mnemonic> | "not" <mnemonic>      → StyleToggle (enable = one field)
//   3. ("fg"|"bg") "default"              → ColorToDefault
//   4. ("fg"|"bg") <color spec, 1–2 fields> → ColorSet
//   5. anything else                      → Invalid
//
// Rule 2 looks up the *last* field so both shapes share one lookup. A
// single field that is not a mnemonic, like a bare `fg`, ends there as
// Invalid rather than falling through.

use ansictl_term::{Channel, Color, Style};

/// Clause separator.
pub const TOKEN_SEPARATOR: char = ';';

/// Field separator within a token.
pub const FIELD_SEPARATOR: char = ' ';

/// The meaning of one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Reset all attributes, then re-assert the default colors.
    Reset,
    /// Turn a style on or off.
    StyleToggle { style: Style, enable: bool },
    /// Return a channel to the default color.
    ColorToDefault(Channel),
    /// Set a channel to an explicit color.
    ColorSet(Channel, Color),
    /// Unrecognized; contributes nothing.
    Invalid,
}

/// Split a clause into its tokens. An empty clause is one empty token.
pub fn tokens(clause: &str) -> impl Iterator<Item = &str> {
    clause.split(TOKEN_SEPARATOR)
}

/// Classify a single token.
#[must_use]
pub fn classify(token: &str) -> Instruction {
    let fields: Vec<&str> = token.split(FIELD_SEPARATOR).collect();

    let instruction = match *fields.as_slice() {
        ["" | "reset"] => Instruction::Reset,
        [mnemonic] | ["not", mnemonic] => Style::from_mnemonic(mnemonic)
            .map_or(Instruction::Invalid, |style| Instruction::StyleToggle {
                style,
                enable: fields.len() == 1,
            }),
        [keyword, ref spec @ ..] if (1..=2).contains(&spec.len()) => {
            Channel::from_keyword(keyword).map_or(Instruction::Invalid, |channel| {
                classify_color(channel, spec)
            })
        }
        _ => Instruction::Invalid,
    };

    if instruction == Instruction::Invalid {
        tracing::trace!(token, "ignoring unrecognized attribute");
    }
    instruction
}

fn classify_color(channel: Channel, spec: &[&str]) -> Instruction {
    if spec == ["default"] {
        return Instruction::ColorToDefault(channel);
    }
    match Color::from_fields(spec) {
        Ok(color) => Instruction::ColorSet(channel, color),
        Err(err) => {
            tracing::trace!(%err, "ignoring color attribute");
            Instruction::Invalid
        }
    }
}

/// Tokenize and classify a whole clause, preserving token order.
pub fn instructions(clause: &str) -> impl Iterator<Item = Instruction> + '_ {
    tokens(clause).map(classify)
}
