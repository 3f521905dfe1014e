use std::sync::atomic::{AtomicI32, Ordering};

use libc::pid_t;

/// Pid of the child currently running in the foreground, if any.
///
/// The interactive loop is the only writer. The signal forwarder only reads.
#[derive(Debug, Default)]
pub struct ForegroundChild {
    pid: AtomicI32,
}

impl ForegroundChild {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, pid: pid_t) {
        self.pid.store(pid, Ordering::SeqCst);
    }

    pub fn clear(&self) {
        self.pid.store(0, Ordering::SeqCst);
    }

    pub fn get(&self) -> Option<pid_t> {
        match self.pid.load(Ordering::SeqCst) {
            pid if pid > 0 => Some(pid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(ForegroundChild::new().get(), None);
    }

    #[test]
    fn test_set_and_clear() {
        let child = ForegroundChild::new();
        child.set(4242);
        assert_eq!(child.get(), Some(4242));
        child.clear();
        assert_eq!(child.get(), None);
    }
}
