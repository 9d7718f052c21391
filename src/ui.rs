//! Terminal UI utilities.
//!
//! ## Components
//!
//! - `ProgressIndicator` - a spinner drawn from its own thread while the
//!   caller blocks on something slow (a package install)
//! - `ask` - a one-line prompt that works with or without a terminal
//!
//! ## Example
//!
//! ```no_run
//! use cppinit::ui::with_progress;
//! use std::time::Duration;
//!
//! let answer = with_progress("Installing make", Duration::from_millis(200), || 42);
//! assert_eq!(answer, 42);
//! ```

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Spinner frames. The last entry is shown once the spinner is finished.
const TICK_STRINGS: &[&str] = &["|", "/", "-", "\\", " "];

/// Message of the final line written when the spinner stops.
pub const DONE_MESSAGE: &str = "Done!";

/// A spinner that has not been started yet.
pub struct ProgressIndicator {
    message: String,
    interval: Duration,
    target: ProgressDrawTarget,
}

/// A spinner whose display loop is running.
///
/// Dropping it stops the loop and waits for it, so the thread never outlives
/// the operation it decorates.
pub struct RunningIndicator {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressIndicator {
    /// Spinner on standard output. Nothing is drawn when stdout is not a terminal.
    pub fn stdout(message: impl Into<String>) -> Self {
        Self::new(message, ProgressDrawTarget::stdout())
    }

    pub fn new(message: impl Into<String>, target: ProgressDrawTarget) -> Self {
        Self {
            message: message.into(),
            interval: Duration::from_millis(200),
            target,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Launch the display loop and return immediately.
    pub fn start(self) -> RunningIndicator {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let pb = ProgressBar::with_draw_target(None, self.target);
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}...")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(TICK_STRINGS),
        );
        pb.set_message(self.message);
        let interval = self.interval;

        let handle = thread::spawn(move || {
            while flag.load(Ordering::Acquire) {
                pb.tick();
                thread::park_timeout(interval);
            }
            pb.set_style(
                ProgressStyle::with_template("{msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.finish_with_message(DONE_MESSAGE);
        });

        RunningIndicator {
            running,
            handle: Some(handle),
        }
    }
}

impl RunningIndicator {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Stop the loop and wait for its final line.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.running.store(false, Ordering::Release);
        handle.thread().unpark();
        if handle.join().is_err() {
            log::debug!("progress indicator thread panicked");
        }
    }
}

impl Drop for RunningIndicator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Run `op` with a stdout spinner showing `message`.
///
/// The spinner is stopped exactly once, whether `op` returns or panics.
pub fn with_progress<T>(message: &str, interval: Duration, op: impl FnOnce() -> T) -> T {
    let _spinner = ProgressIndicator::stdout(message)
        .with_interval(interval)
        .start();
    op()
}

/// Ask a single-line question.
///
/// Uses an interactive prompt on a terminal and a plain line read from stdin
/// otherwise. End of input yields `default`.
pub fn ask(question: &str, default: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        let answer = inquire::Text::new(question)
            .with_default(default)
            .prompt()
            .context("Prompt failed")?;
        return Ok(answer);
    }

    print!("{} ", question);
    io::stdout().flush()?;
    read_answer(io::stdin().lock(), default)
}

fn read_answer(mut input: impl BufRead, default: &str) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read answer")?;
    if read == 0 {
        return Ok(default.to_string());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
