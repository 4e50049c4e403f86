//! Interactive prompts for CLI commands
//!
//! Uses dialoguer when stdin is a terminal. Piped input is read one line per
//! question instead, so answers can be scripted.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Confirm, Input};
use sync_core::{ChangePreview, Decision, LogicalFile};

use crate::error::Result;

/// Push confirmation read from the terminal or from piped stdin.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl sync_core::Confirm for TerminalConfirm {
    fn confirm(&mut self, _file: &LogicalFile, _preview: &ChangePreview) -> sync_core::Result<Decision> {
        const PROMPT: &str = "  Apply this change? [y/n/a]";

        let answer = if stdin_is_terminal() {
            Input::<String>::new()
                .with_prompt(PROMPT)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| sync_core::Error::Io(io::Error::other(e.to_string())))?
        } else {
            read_line_answer(PROMPT, &mut io::stdin().lock(), &mut io::stderr())?
        };
        Ok(parse_decision(&answer))
    }
}

/// Map a typed answer to a decision. Anything unrecognised declines.
pub fn parse_decision(answer: &str) -> Decision {
    match answer.trim().to_lowercase().as_str() {
        "a" | "all" => Decision::AcceptAll,
        "y" | "yes" => Decision::Accept,
        _ => Decision::Decline,
    }
}

/// Whether a free-text answer means yes.
pub fn parse_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Yes/no question that defaults to no.
pub fn confirm_no_default(prompt: &str) -> Result<bool> {
    if !stdin_is_terminal() {
        let answer = read_line_answer(&format!("{prompt} [y/N]"), &mut io::stdin().lock(), &mut io::stderr())?;
        return Ok(parse_yes(&answer));
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Free-text question with a default answer.
pub fn ask_with_default(prompt: &str, default: &str) -> Result<String> {
    if !stdin_is_terminal() {
        let answer = read_line_answer(&format!("{prompt} [{default}]"), &mut io::stdin().lock(), &mut io::stderr())?;
        return Ok(if answer.is_empty() { default.to_string() } else { answer });
    }
    let answer: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(answer.trim().to_string())
}

/// Free-text question that may be left empty.
pub fn ask_optional(prompt: &str) -> Result<String> {
    if !stdin_is_terminal() {
        return Ok(read_line_answer(prompt, &mut io::stdin().lock(), &mut io::stderr())?);
    }
    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

/// Write `prompt` to `output` and read one trimmed line from `input`.
///
/// End of input reads as an empty answer.
fn read_line_answer(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    writeln!(output)?;
    Ok(line.trim().to_string())
}
