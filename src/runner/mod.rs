use std::process::Command;
use tracing::debug;

/// Capability seam for running external commands. Production code uses
/// [`ShellRunner`]; tests substitute a fake so no process is ever spawned.
pub trait CommandRunner {
    /// Run a command line and return its captured stdout.
    fn run(&self, command: &str) -> String;
}

/// Runs commands through `sh -c`, the same way the review host's backtick
/// helper does. Exit status and stderr are ignored: a failed run is
/// indistinguishable from a clean run with no output.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> String {
        debug!("Running `{}`", command);

        match Command::new("sh").arg("-c").arg(command).output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).to_string(),
            Err(e) => {
                debug!("Failed to spawn `{}`: {}", command, e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout() {
        let out = ShellRunner.run("echo hello");
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_nonzero_exit_yields_stdout_only() {
        let out = ShellRunner.run("echo partial; exit 3");
        assert_eq!(out, "partial\n");
    }

    #[test]
    fn test_stderr_is_ignored() {
        let out = ShellRunner.run("echo noise >&2");
        assert_eq!(out, "");
    }
}
