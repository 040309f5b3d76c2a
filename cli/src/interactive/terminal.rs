//! Terminal front end for live mode
//!
//! Draws a prompt line and, only while the input has a result, the result
//! panel below it. Runs a blocking crossterm event loop.

use super::state::{KeyOutcome, LiveState};
use crate::output::ResultFormatter;
use anyhow::{Context, Result};
use codepeek_core::Settings;
use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

const TITLE: &str = "Enter a character or hex value:";
const HINT: &str = "Esc to close, Ctrl-U to clear";
/// First row of the result panel
const PANEL_ROW: u16 = 3;

/// Restores the terminal when dropped, including on error paths
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run live mode until the user quits
pub fn run_live(settings: &Settings) -> Result<()> {
    let formatter = ResultFormatter::new(settings.color);
    let mut state = LiveState::new();
    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    draw(&mut stdout, &state, &formatter, &settings.prompt)?;

    loop {
        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => match state.handle_key(key) {
                KeyOutcome::Quit => break,
                KeyOutcome::Edited => {
                    debug!(input = state.input(), "Input changed");
                    draw(&mut stdout, &state, &formatter, &settings.prompt)?;
                }
                KeyOutcome::Ignored => {}
            },
            Event::Resize(_, _) => draw(&mut stdout, &state, &formatter, &settings.prompt)?,
            _ => {}
        }
    }

    Ok(())
}

/// Redraw the whole screen for the current state
fn draw<W: Write>(
    out: &mut W,
    state: &LiveState,
    formatter: &ResultFormatter,
    prompt: &str,
) -> Result<()> {
    queue!(
        out,
        cursor::Hide,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(TITLE),
        MoveTo(0, 1),
        Print(prompt),
        Print(visible_input(state.input())),
    )?;

    // The panel only exists while there is something to show
    if let Some(description) = state.interpretation().description() {
        let mut row = PANEL_ROW;
        for line in formatter.panel_lines(description) {
            queue!(out, MoveTo(2, row), Print(line))?;
            row += 1;
        }
        queue!(out, MoveTo(0, row + 1), Print(formatter.format_hint(HINT)))?;
    } else {
        queue!(out, MoveTo(0, PANEL_ROW), Print(formatter.format_hint(HINT)))?;
    }

    // Terminal columns, not chars: wide glyphs take two, combining marks none
    let cursor_col =
        UnicodeWidthStr::width(prompt) + UnicodeWidthStr::width(visible_input(state.input()).as_str());
    queue!(
        out,
        MoveTo(u16::try_from(cursor_col).unwrap_or(u16::MAX), 1),
        cursor::Show
    )?;
    out.flush()?;
    Ok(())
}

/// Input as echoed on the prompt line; tabs would move the cursor, so show them as spaces
fn visible_input(input: &str) -> String {
    input.replace('\t', " ")
}
