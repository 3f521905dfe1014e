use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

use libc::pid_t;

use super::{ForegroundChild, ProcessError};
use crate::path::PathRegistry;

/// How the foreground child left the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled(i32),
    Stopped(i32),
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildStatus::Exited(code) => write!(f, "exited with status {}", code),
            ChildStatus::Signaled(sig) => write!(f, "killed by signal {}", sig),
            ChildStatus::Stopped(sig) => write!(f, "stopped by signal {}", sig),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `args[0]` from the registry in the foreground and blocks until it
    /// exits, is killed, or stops.
    ///
    /// A stopped child is abandoned: its pid leaves the foreground and it is
    /// never resumed or reaped by the shell.
    pub fn spawn_process(
        &self,
        args: &[String],
        redirect: Option<&Path>,
        paths: &PathRegistry,
        foreground: &ForegroundChild,
    ) -> Result<ChildStatus, ProcessError> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| ProcessError::NotFound(String::new()))?;
        let program = paths
            .resolve(name)
            .ok_or_else(|| ProcessError::NotFound(name.clone()))?;

        let stdout = match redirect {
            Some(path) => Stdio::from(open_redirect(path)?),
            None => Stdio::inherit(),
        };

        let child = {
            let mut command = Command::new(&program);
            command
                .arg0(name)
                .args(rest)
                .stdin(Stdio::inherit())
                .stdout(stdout)
                .stderr(Stdio::inherit());
            command.spawn().map_err(ProcessError::Spawn)?
        };

        let pid = child.id() as pid_t;
        foreground.set(pid);
        let status = wait_for(pid);
        foreground.clear();
        status
    }
}

fn open_redirect(path: &Path) -> Result<File, ProcessError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o666)
        .open(path)
        .map_err(|e| ProcessError::Redirect(path.display().to_string(), e))
}

fn wait_for(pid: pid_t) -> Result<ChildStatus, ProcessError> {
    let mut status = 0;
    loop {
        let rc = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) };
        if rc == pid {
            break;
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(ProcessError::Wait(err));
        }
    }

    if libc::WIFEXITED(status) {
        Ok(ChildStatus::Exited(libc::WEXITSTATUS(status)))
    } else if libc::WIFSIGNALED(status) {
        Ok(ChildStatus::Signaled(libc::WTERMSIG(status)))
    } else {
        Ok(ChildStatus::Stopped(libc::WSTOPSIG(status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::os::unix::fs::symlink;
    use std::path::PathBuf;

    // Programs are symlinks to /bin/sh so no test writes a file it then executes.
    fn setup_bin(name: &str) -> (PathBuf, PathRegistry) {
        let dir = env::temp_dir().join(format!("cmpsh_exec_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        symlink("/bin/sh", dir.join("run")).unwrap();

        let mut paths = PathRegistry::new();
        paths.replace([dir.to_str().unwrap()]);
        (dir, paths)
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exit_status_is_reported() {
        let (dir, paths) = setup_bin("status");
        let foreground = ForegroundChild::new();

        let status = ProcessExecutor::new()
            .spawn_process(&args(&["run", "-c", "exit 3"]), None, &paths, &foreground)
            .unwrap();
        assert_eq!(status, ChildStatus::Exited(3));
        assert_eq!(foreground.get(), None);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_child_sees_original_name_as_arg0() {
        let (dir, paths) = setup_bin("arg0");
        let out = dir.join("arg0.txt");

        ProcessExecutor::new()
            .spawn_process(
                &args(&["run", "-c", "echo $0"]),
                Some(&out),
                &paths,
                &ForegroundChild::new(),
            )
            .unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "run\n");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_redirect_truncates_existing_file() {
        let (dir, paths) = setup_bin("redirect");
        let out = dir.join("out.txt");
        fs::write(&out, "stale content that is longer than the output\n").unwrap();

        ProcessExecutor::new()
            .spawn_process(
                &args(&["run", "-c", "echo hello"]),
                Some(&out),
                &paths,
                &ForegroundChild::new(),
            )
            .unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "hello\n");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_redirect_to_missing_directory_fails() {
        let (dir, paths) = setup_bin("badredirect");
        let out = dir.join("no_such_dir").join("out.txt");

        let result = ProcessExecutor::new().spawn_process(
            &args(&["run", "-c", "echo hello"]),
            Some(&out),
            &paths,
            &ForegroundChild::new(),
        );
        assert!(matches!(result, Err(ProcessError::Redirect(_, _))));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_stopped_child_leaves_foreground() {
        let (dir, paths) = setup_bin("stopped");
        let pid_file = dir.join("pid.txt");
        let foreground = ForegroundChild::new();

        let status = ProcessExecutor::new()
            .spawn_process(
                &args(&["run", "-c", "echo $$; kill -STOP $$"]),
                Some(&pid_file),
                &paths,
                &foreground,
            )
            .unwrap();
        assert_eq!(status, ChildStatus::Stopped(libc::SIGSTOP));
        assert_eq!(foreground.get(), None);

        let pid: pid_t = fs::read_to_string(&pid_file).unwrap().trim().parse().unwrap();
        unsafe {
            libc::kill(pid, libc::SIGKILL);
            libc::waitpid(pid, std::ptr::null_mut(), 0);
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_unresolved_command() {
        let (dir, paths) = setup_bin("missing");
        let result = ProcessExecutor::new().spawn_process(
            &args(&["definitely_not_here"]),
            None,
            &paths,
            &ForegroundChild::new(),
        );
        assert!(matches!(result, Err(ProcessError::NotFound(_))));

        fs::remove_dir_all(dir).unwrap();
    }
}
