use std::io::{self, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use libc::{c_int, pid_t};
use signal_hook::consts::{SIGINT, SIGTSTP};
use signal_hook::iterator::{Handle, Signals};

use super::{ForegroundChild, ProcessError};

/// What the forwarder did with one signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relay {
    Forwarded(pid_t),
    Reprompted,
}

/// Relays `signal` to the foreground child, or redraws `prompt` when there is
/// none. Never touches the foreground state.
pub fn relay<W: Write>(
    signal: c_int,
    foreground: &ForegroundChild,
    prompt: Option<&str>,
    out: &mut W,
) -> io::Result<Relay> {
    out.write_all(b"\n")?;

    if let Some(pid) = foreground.get() {
        out.flush()?;
        if unsafe { libc::kill(pid, signal) } != 0 {
            return Err(io::Error::last_os_error());
        }
        return Ok(Relay::Forwarded(pid));
    }

    if let Some(prompt) = prompt {
        out.write_all(prompt.as_bytes())?;
    }
    out.flush()?;
    Ok(Relay::Reprompted)
}

/// Receives SIGINT and SIGTSTP on a dedicated thread and relays them, so no
/// shell logic runs inside the asynchronous handler itself.
pub struct Forwarder {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl Forwarder {
    pub fn install(
        foreground: Arc<ForegroundChild>,
        prompt: Option<String>,
        debug: bool,
    ) -> Result<Self, ProcessError> {
        let mut signals = Signals::new([SIGINT, SIGTSTP])
            .map_err(|e| ProcessError::SignalError(e.to_string()))?;
        let handle = signals.handle();

        let thread = thread::Builder::new()
            .name("cmpsh-signals".to_string())
            .spawn(move || {
                for signal in signals.forever() {
                    let mut stdout = io::stdout().lock();
                    let result = relay(signal, &foreground, prompt.as_deref(), &mut stdout);
                    drop(stdout);
                    if debug {
                        eprintln!("cmpsh: debug: signal {}: {:?}", signal, result);
                    }
                }
            })
            .map_err(|e| ProcessError::SignalError(e.to_string()))?;

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }

    /// Unregisters the signals and waits for the relay thread to finish.
    pub fn close(mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
