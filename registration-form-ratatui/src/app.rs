//! Terminal setup and the event loop.

use std::future::pending;
use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{StreamExt, future::BoxFuture};
use ratatui::{Terminal, prelude::CrosstermBackend};
use registration::{SubmissionOutcome, Submitter};
use thiserror::Error;
use tracing::{debug, info};

use crate::{FormView, ViewAction, draw};

/// Error type for the terminal form.
#[derive(Debug, Error)]
pub enum RatatuiFormError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal stopped delivering events.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

type Term = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Term, RatatuiFormError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term) -> Result<(), RatatuiFormError> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the form in the terminal until the user quits.
///
/// The submission runs concurrently with input handling, so the screen keeps
/// redrawing (and ignoring keys) while a request is in flight.
pub async fn run<S>(view: &mut FormView, submitter: &S) -> Result<(), RatatuiFormError>
where
    S: Submitter + ?Sized,
{
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, view, submitter).await;
    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

async fn event_loop<S>(
    terminal: &mut Term,
    view: &mut FormView,
    submitter: &S,
) -> Result<(), RatatuiFormError>
where
    S: Submitter + ?Sized,
{
    let mut events = EventStream::new();
    let mut in_flight: Option<BoxFuture<'static, SubmissionOutcome>> = None;

    loop {
        terminal.draw(|frame| draw(frame, view))?;

        tokio::select! {
            outcome = next_outcome(&mut in_flight) => {
                in_flight = None;
                let state = view.finish_submit(outcome);
                debug!(?state, "submission finished");
            }
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => match view.handle_key(key) {
                        ViewAction::Continue => {}
                        ViewAction::Submit(record) => {
                            in_flight = Some(submitter.submit(&record));
                        }
                        ViewAction::Quit => {
                            info!("registration form closed");
                            return Ok(());
                        }
                    },
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => {
                        return Err(RatatuiFormError::Terminal(
                            "event stream ended".to_string(),
                        ));
                    }
                }
            }
        }
    }
}

/// Resolves with the outcome of the in-flight submission, or never if there
/// is none.
async fn next_outcome(
    in_flight: &mut Option<BoxFuture<'static, SubmissionOutcome>>,
) -> SubmissionOutcome {
    match in_flight {
        Some(submission) => submission.await,
        None => pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_types() {
        let err = RatatuiFormError::Terminal("event stream ended".to_string());
        assert_eq!(err.to_string(), "Terminal error: event stream ended");

        let err = RatatuiFormError::from(io::Error::other("boom"));
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}
