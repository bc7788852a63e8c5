use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use mintcheck_client::{AccountSnapshot, LookupError, LookupOutcome};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Print a result: pretty JSON in JSON mode, its `Display` form otherwise.
pub fn print<T: Serialize + Display>(value: &T) -> anyhow::Result<()> {
    if is_json() {
        let s = serde_json::to_string_pretty(value)?;
        println!("{s}");
        return Ok(());
    }
    println!("{value}");
    Ok(())
}

/// Colored only when stdout is a terminal.
pub fn stdout() -> StandardStream {
    let choice = if io::stdout().is_terminal() { ColorChoice::Auto } else { ColorChoice::Never };
    StandardStream::stdout(choice)
}

/// Write the human-readable lines for a lookup result.
pub fn write_outcome<W: WriteColor>(out: &mut W, outcome: &Result<LookupOutcome, LookupError>) -> io::Result<()> {
    match outcome {
        Ok(LookupOutcome::Found(snapshot)) => write_snapshot(out, snapshot),
        Ok(LookupOutcome::ToolFailed { stderr, .. }) => {
            label(out, "Error getting account:", Color::Red)?;
            writeln!(out, " {stderr}")
        }
        Err(e) => {
            label(out, "Exception:", Color::Red)?;
            writeln!(out, " {e}")
        }
    }
}

fn write_snapshot<W: WriteColor>(out: &mut W, snapshot: &AccountSnapshot) -> io::Result<()> {
    label(out, "Owner:", Color::Green)?;
    writeln!(out, " {}", snapshot.owner().unwrap_or("(none)"))?;

    label(out, "Data:", Color::Green)?;
    writeln!(out, " {}", snapshot.raw())?;

    if let Some(Ok(bytes)) = snapshot.data_bytes() {
        writeln!(out, "Decoded data: {} bytes", bytes.len())?;
    }
    Ok(())
}

fn label<W: WriteColor>(out: &mut W, text: &str, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{text}")?;
    out.reset()
}
