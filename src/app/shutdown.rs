//! Shutdown handling for the application.
//!
//! The simulation loop never checks for cancellation. Instead a listener task
//! waits for SIGINT or SIGTERM, restores the terminal and ends the process.

use anyhow::Result;
use std::io::{self, Write};

/// Conventional status for a process ended by an interrupt.
pub const EXIT_CODE_INTERRUPTED: i32 = 130;

/// Manages signal-driven shutdown of the application.
pub struct ShutdownManager {
    exit_code: i32,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    /// Creates a new shutdown manager.
    pub fn new() -> Self {
        Self {
            exit_code: EXIT_CODE_INTERRUPTED,
        }
    }

    /// Gets the exit code.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Registers the signal handlers and spawns the listener.
    ///
    /// Must be called from inside a tokio runtime. Handlers are registered
    /// before this returns, so a signal arriving right after is not missed.
    pub fn install(&self) -> Result<()> {
        let listener = TerminationListener::register()?;
        let code = self.exit_code;

        tokio::spawn(async move {
            if let Err(e) = listener.wait().await {
                tracing::error!("Signal listener failed: {e}");
                return;
            }
            tracing::info!("Termination signal received, restoring terminal");
            // The render thread keeps running; holding the lock until exit
            // stops it from painting a frame over the cleared screen.
            let _out = reset_and_hold(io::stdout().lock());
            std::process::exit(code);
        });
        Ok(())
    }
}

/// Writes the reset sequence and hands the writer back so the caller can
/// keep exclusive access to it.
fn reset_and_hold<W: Write>(mut out: W) -> W {
    if let Err(e) = crate::ui::reset_terminal(&mut out) {
        tracing::warn!("Failed to restore terminal: {e}");
    }
    out
}

#[cfg(unix)]
struct TerminationListener {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl TerminationListener {
    fn register() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    async fn wait(mut self) -> io::Result<()> {
        tokio::select! {
            _ = self.interrupt.recv() => {}
            _ = self.terminate.recv() => {}
        }
        Ok(())
    }
}

#[cfg(not(unix))]
struct TerminationListener;

#[cfg(not(unix))]
impl TerminationListener {
    fn register() -> io::Result<Self> {
        Ok(Self)
    }

    async fn wait(self) -> io::Result<()> {
        tokio::signal::ctrl_c().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex, MutexGuard};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_shutdown_manager_new() {
        let manager = ShutdownManager::new();
        assert_eq!(manager.exit_code(), 130);
    }

    const RESET: &[u8] = b"\x1b[0m\x1b[3J\x1b[1;1H\x1b[2J";

    struct GuardWriter<'a>(MutexGuard<'a, Vec<u8>>);

    impl Write for GuardWriter<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reset_and_hold_returns_writer() {
        let mut out = reset_and_hold(Vec::new());
        out.extend_from_slice(b"after");
        assert!(out.starts_with(RESET));
        assert!(out.ends_with(b"after"));
    }

    #[test]
    fn test_held_writer_blocks_frames_until_released() {
        let screen = Arc::new(Mutex::new(Vec::new()));
        let held = reset_and_hold(GuardWriter(screen.lock().unwrap()));

        let renderer = {
            let screen = Arc::clone(&screen);
            thread::spawn(move || screen.lock().unwrap().extend_from_slice(b"frame"))
        };

        thread::sleep(Duration::from_millis(50));
        assert!(held.0.ends_with(RESET));
        assert!(!renderer.is_finished());

        drop(held);
        renderer.join().unwrap();
        let screen = screen.lock().unwrap();
        assert!(screen.starts_with(RESET));
        assert!(screen.ends_with(b"frame"));
    }

    #[tokio::test]
    async fn test_install_inside_runtime() {
        let manager = ShutdownManager::new();
        assert!(manager.install().is_ok());
    }
}
