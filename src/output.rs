//! Output formatting for query results and automaton statistics

use crate::automaton::AutomatonStats;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout_stream(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print a retrieved substring
///
/// Substrings are byte strings; non-UTF-8 bytes are replacement-decoded for
/// display.
pub fn print_substring(bytes: &[u8], color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);
    writeln!(stdout, "{}", String::from_utf8_lossy(bytes))
}

/// Print a membership verdict for `contains`
pub fn print_contains_verdict(pattern: &[u8], found: bool, color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);

    if found {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, "found")?;
    } else {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "not found")?;
    }
    stdout.reset()?;
    writeln!(stdout, ": {}", String::from_utf8_lossy(pattern))
}

/// Print automaton statistics as an aligned key/value block
pub fn print_stats(stats: &AutomatonStats, color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);

    writeln!(stdout, "Automaton Statistics")?;
    writeln!(stdout, "====================")?;
    writeln!(stdout)?;
    writeln!(stdout, "Text length:          {}", stats.text_len)?;
    writeln!(stdout, "States:               {}", stats.state_count)?;
    writeln!(stdout, "  of which clones:    {}", stats.clone_count)?;
    writeln!(stdout, "Transitions:          {}", stats.transition_count)?;
    writeln!(
        stdout,
        "Distinct substrings:  {}",
        stats.distinct_substrings
    )?;

    Ok(())
}
