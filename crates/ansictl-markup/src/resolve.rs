// SPDX-License-Identifier: MIT
//
// Resolver: one clause in, one escape sequence (or nothing) out.
//
// Instructions are turned into SGR parameters left to right and joined into
// a single `ESC [ ... m`. Nothing is merged or reordered; `fg red;fg blue`
// emits both colors and the terminal keeps the last. A clause whose
// instructions are all invalid resolves to the empty string, so a typo in
// markup costs formatting, never garbage on screen.
//
// A reset re-asserts the default colors right after the `0`: SGR 0 also
// drops any color the terminal was given by `set_foreground_color`, and the
// text after `#[reset]` should look like the text before any markup.

use ansictl_term::{Channel, Paint, ansi};

use crate::defaults::DefaultColors;
use crate::token::{Instruction, instructions};

/// SGR parameters contributed by one instruction, appended to `params`.
fn push_params(params: &mut Vec<String>, instruction: Instruction, defaults: &DefaultColors) {
    match instruction {
        Instruction::Reset => {
            params.push("0".to_owned());
            if let Some(color) = defaults.foreground() {
                params.push(color.code(Channel::Foreground));
            }
            if let Some(color) = defaults.background() {
                params.push(color.code(Channel::Background));
            }
        }
        Instruction::StyleToggle { style, enable } => params.push(style.code(enable)),
        Instruction::ColorToDefault(channel) => params.push(defaults.code(channel)),
        Instruction::ColorSet(channel, color) => params.push(color.code(channel)),
        Instruction::Invalid => {}
    }
}

/// The SGR parameter list for a clause, without prefix or terminator.
#[must_use]
pub fn parameters(clause: &str, defaults: &DefaultColors) -> Vec<String> {
    let mut params = Vec::new();
    for instruction in instructions(clause) {
        push_params(&mut params, instruction, defaults);
    }
    params
}

/// Resolve a clause into its escape sequence, or `""` if it has no effect.
#[must_use]
pub fn resolve(clause: &str, defaults: &DefaultColors) -> String {
    let params = parameters(clause, defaults);
    if params.is_empty() {
        String::new()
    } else {
        ansi::sgr_string(&params.join(";"))
    }
}
