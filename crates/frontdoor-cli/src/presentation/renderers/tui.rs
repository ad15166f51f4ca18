//! TUI Renderer for the browse command
//!
//! Owns the terminal and the event loop. Key presses go to
//! `BrowserComponent`; the actions it emits are handed to the handler's update
//! function, which applies them to the engine and returns the next screen.
//!
//! ## Design:
//! - Renderer does NOT own data (the update fn returns fresh view models)
//! - Component owns UI state (selection, focus, search buffer)
//! - One key event is processed to completion before the next is read

use std::io;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::presentation::view_models::CatalogPageViewModel;
use crate::presentation::views::tui::components::{BrowserAction, BrowserComponent};

pub struct TuiRenderer {
    component: BrowserComponent,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            component: BrowserComponent::new(),
        }
    }

    /// Run the browser until the user quits.
    ///
    /// Restores the terminal even when setup or the loop fails.
    pub fn run<F>(mut self, initial: CatalogPageViewModel, update: F) -> Result<()>
    where
        F: FnMut(BrowserAction) -> Result<CatalogPageViewModel>,
    {
        enable_raw_mode()?;
        let _guard = TerminalGuard::new(restore_terminal);

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        self.event_loop(&mut terminal, initial, update)
    }

    fn event_loop<F>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        initial: CatalogPageViewModel,
        mut update: F,
    ) -> Result<()>
    where
        F: FnMut(BrowserAction) -> Result<CatalogPageViewModel>,
    {
        let mut screen = initial;
        loop {
            terminal.draw(|f| self.component.render(f, &screen))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match self.component.handle_input(key, &screen) {
                Some(BrowserAction::Quit) => break,
                Some(action) => screen = update(action)?,
                None => {}
            }
        }
        Ok(())
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `restore` when dropped.
struct TerminalGuard<R: FnMut()> {
    restore: R,
}

impl<R: FnMut()> TerminalGuard<R> {
    fn new(restore: R) -> Self {
        Self { restore }
    }
}

impl<R: FnMut()> Drop for TerminalGuard<R> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}
