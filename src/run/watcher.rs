//! `StopWatcher`: Dedicated thread for observing operator stop requests.
//!
//! The watcher polls crossterm events with a timeout so it can notice its
//! own shutdown flag, and trips the shared [`CancelToken`] when a stop key
//! arrives. The run-loop itself never touches the event queue; it only
//! polls the token.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::cancel::CancelToken;

/// Watches terminal input and cancels the token on `q`, `Esc`, or `Ctrl-C`.
///
/// Requires the terminal to be in raw mode (set up by the binary before
/// spawning); in raw mode `Ctrl-C` arrives as an ordinary key event rather
/// than a signal.
pub struct StopWatcher {
    /// Handle to the watcher thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl StopWatcher {
    /// Spawn the watcher thread.
    ///
    /// # Arguments
    ///
    /// * `cancel` - Token to trip when a stop key is observed.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the watcher thread.
    pub fn spawn(cancel: CancelToken, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("brainwave-input".to_string())
            .spawn(move || {
                Self::run_loop(&cancel, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input watcher thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the watcher to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the watcher thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main polling loop.
    fn run_loop(cancel: &CancelToken, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) if is_stop_request(&ev) => cancel.cancel(),
                    Ok(_) => {}
                    Err(_) => {
                        // A dead event source would strand an uncancellable
                        // loop; treat it as a stop request.
                        cancel.cancel();
                        break;
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown)
                }
                Err(_) => {
                    cancel.cancel();
                    break;
                }
            }
        }
    }
}

impl Drop for StopWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Check whether an event is an operator stop request.
fn is_stop_request(ev: &Event) -> bool {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        },
        _ => false,
    }
}
