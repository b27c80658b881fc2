//! Dry command: interactive menu over a [`DryingTracker`].

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use tc_core::DryingTracker;

pub const MENU_PROMPT: &str = "Choose an option: (A)dd, (V)iew Current Items, or (Q)uit: ";
const RADIUS_PROMPT: &str = "Radius: ";

/// Runs the menu until the user quits or input ends.
///
/// `now` is consulted once per add and once per view, so every status line of
/// a single view shares the same instant.
pub fn run<R, W, C>(
    mut input: R,
    output: &mut W,
    tracker: &mut DryingTracker,
    mut now: C,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: FnMut() -> DateTime<Utc>,
{
    loop {
        prompt(output, MENU_PROMPT)?;
        let Some(choice) = next_token(&mut input)? else {
            break;
        };

        match choice.to_ascii_lowercase().as_str() {
            "q" => break,
            "a" => {
                prompt(output, RADIUS_PROMPT)?;
                let Some(raw) = next_token(&mut input)? else {
                    break;
                };
                let added = match raw.parse::<f64>() {
                    Ok(radius) => tracker.add(radius, now()).ok(),
                    Err(_) => None,
                };
                match added {
                    Some(item) => {
                        let line = item.status_line_at(item.started_at);
                        writeln!(output, "{line}")?;
                    }
                    None => {
                        tracing::debug!(input = %raw, "rejected radius");
                        writeln!(output, "Error: Please enter a valid positive number.")?;
                    }
                }
            }
            "v" => view(output, tracker, now())?,
            _ => writeln!(output, "Invalid choice. Please enter A, V, or Q.")?,
        }
    }

    writeln!(output, "User quit. Program exiting.")?;
    Ok(())
}

/// Prunes finished objects, then prints the rest.
fn view<W: Write>(output: &mut W, tracker: &mut DryingTracker, now: DateTime<Utc>) -> Result<()> {
    if tracker.is_empty() {
        writeln!(output, "No drying objects being tracked.")?;
        return Ok(());
    }

    tracker.prune(now);
    for item in tracker.iter() {
        writeln!(output, "{}", item.status_line_at(now))?;
    }
    writeln!(output, "{} batches being tracked.", tracker.len())?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{text}")?;
    output.flush().context("failed to flush prompt")
}

/// Reads the first word of the next non-blank line; `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced rather than treated as an error, so
/// they surface as an unrecognised choice.
fn next_token<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line).context("failed to read input")? == 0 {
            return Ok(None);
        }
        if let Some(token) = String::from_utf8_lossy(&line).split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}
