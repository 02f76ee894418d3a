// SPDX-License-Identifier: MIT
//
// ansictl — render inline attribute markup in the terminal.
//
// This is the binary that wires the two crates together:
//
//   ansictl-markup → delimiters, tokenizer, resolver, default colors
//   ansictl-term   → color parsing for the --fg / --bg flags, SGR output
//
// Each run flows through:
//
//   args or stdin → Markup::parse (or ::text with --plain) → stdout
//
// Default colors given on the command line are written before the text and
// reset after it, so the shell prompt comes back in its own colors.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ansictl_markup::Markup;
use ansictl_markup::delimiters::{DEFAULT_END, DEFAULT_START};
use ansictl_term::Color;

// ─── Command line ───────────────────────────────────────────────────────────

/// Render `#[...]` style markup as ANSI escape sequences.
#[derive(Parser, Debug)]
#[command(name = "ansictl")]
#[command(version)]
#[command(about = "Render #[bd;fg red]inline markup#[] as ANSI escape sequences", long_about = None)]
struct Cli {
    /// Markup to render, joined with spaces. Reads stdin when omitted.
    text: Vec<String>,

    /// Strip the markup and print plain text instead.
    #[arg(short, long)]
    plain: bool,

    /// Start delimiter for attribute clauses.
    #[arg(long, value_name = "START", default_value = DEFAULT_START)]
    start: String,

    /// End delimiter for attribute clauses.
    #[arg(long, value_name = "END", default_value = DEFAULT_END)]
    end: String,

    /// Default foreground color (e.g. red, "bright blue", #0f0, 10,20,30, 196).
    #[arg(long, value_name = "COLOR")]
    fg: Option<Color>,

    /// Default background color, same forms as --fg.
    #[arg(long, value_name = "COLOR")]
    bg: Option<Color>,

    /// Do not print a trailing newline.
    #[arg(short = 'n', long)]
    no_newline: bool,
}

impl Cli {
    /// The markup source: the positional text, or all of `input`.
    fn source(&self, input: &mut impl Read) -> io::Result<String> {
        if self.text.is_empty() {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            Ok(buf)
        } else {
            Ok(self.text.join(" "))
        }
    }
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Render `source` per the flags in `cli`, writing everything to `out`.
fn render(cli: &Cli, source: &str, out: &mut impl Write) -> ansictl_markup::Result<()> {
    let mut markup = Markup::with_delimiters(&cli.start, &cli.end)?;

    if cli.plain {
        out.write_all(markup.text(source).as_bytes())?;
    } else {
        if let Some(color) = cli.fg {
            markup.set_foreground_color(color, out)?;
        }
        if let Some(color) = cli.bg {
            markup.set_background_color(color, out)?;
        }

        out.write_all(markup.parse(source).as_bytes())?;

        if cli.fg.is_some() {
            markup.reset_foreground_color(out)?;
        }
        if cli.bg.is_some() {
            markup.reset_background_color(out)?;
        }
    }

    if !cli.no_newline && !source.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "starting");

    let source = match cli.source(&mut io::stdin().lock()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("ansictl: failed to read stdin: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = render(&cli, &source, &mut io::stdout().lock()) {
        eprintln!("ansictl: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ansictl").chain(args.iter().copied())).unwrap()
    }

    fn run(args: &[&str]) -> String {
        let cli = cli(args);
        let source = cli.source(&mut io::empty()).unwrap();
        let mut out = Vec::new();
        render(&cli, &source, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ── Arguments ─────────────────────────────────────────────────────────

    #[test]
    fn defaults() {
        let c = cli(&[]);
        assert_eq!(c.start, "#[");
        assert_eq!(c.end, "]");
        assert!(c.text.is_empty());
        assert!(!c.plain);
        assert_eq!(c.fg, None);
    }

    #[test]
    fn color_flags_use_the_markup_grammar() {
        let c = cli(&["--fg", "bright blue", "--bg", "#0f0"]);
        assert_eq!(c.fg, Some(Color::BRIGHT_BLUE));
        assert_eq!(c.bg, Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn bad_color_flag_is_rejected() {
        let parsed = Cli::try_parse_from(["ansictl", "--fg", "pink"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn source_reads_input_when_no_text() {
        let c = cli(&[]);
        let mut input: &[u8] = b"#[bd]piped\n";
        assert_eq!(c.source(&mut input).unwrap(), "#[bd]piped\n");
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    #[test]
    fn renders_joined_text() {
        assert_eq!(run(&["#[bd]Hello,", "World#[]"]), "\x1b[1mHello, World\x1b[0m\n");
    }

    #[test]
    fn plain_strips_markup() {
        assert_eq!(run(&["-p", "#[bd]Hello#[]"]), "Hello\n");
    }

    #[test]
    fn no_newline_flag() {
        assert_eq!(run(&["-n", "#[ul]x"]), "\x1b[4mx");
    }

    #[test]
    fn custom_delimiters() {
        assert_eq!(
            run(&["--start", "{", "--end", "}", "{it}x#[bd]"]),
            "\x1b[3mx#[bd]\n"
        );
    }

    #[test]
    fn default_colors_wrap_the_output() {
        assert_eq!(
            run(&["--fg", "red", "a#[]b"]),
            "\x1b[38;5;1ma\x1b[0;38;5;1mb\x1b[39m\n"
        );
    }

    #[test]
    fn plain_ignores_default_colors() {
        assert_eq!(run(&["-p", "--bg", "blue", "a#[]b"]), "ab\n");
    }
}
