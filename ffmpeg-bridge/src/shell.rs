use std::io;
#[cfg(windows)]
use std::os::windows::process::CommandExt;
use std::process::Command;
use std::process::ExitStatus;

use crate::error::BridgeError;
use crate::error::Result;

/// The process boundary of both bridges: a single command string in, an exit
/// code out.
pub trait ShellRunner {
    /// Run `command` through the platform command interpreter, block until it
    /// exits and return its exit code.
    fn run(&self, command: &str) -> io::Result<i32>;
}

/// Hands commands to `cmd.exe /C` on Windows and `sh -c` everywhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl ShellRunner for SystemShell {
    fn run(&self, command: &str) -> io::Result<i32> {
        let status = interpreter(command).status()?;
        Ok(exit_code(status))
    }
}

#[cfg(windows)]
fn interpreter(command: &str) -> Command {
    let mut cmd = Command::new("cmd.exe");
    // cmd.exe parses the rest of the line itself, so it must arrive unquoted
    cmd.arg("/C").raw_arg(command);
    cmd
}

#[cfg(not(windows))]
fn interpreter(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or_else(|| {
        tracing::warn!("command interpreter terminated without an exit code: {status}");
        1
    })
}

/// Run `command` once through `runner`, passing its exit code through.
#[tracing::instrument(skip(runner))]
pub fn execute<R: ShellRunner + ?Sized>(runner: &R, command: &str) -> Result<i32> {
    let code = runner
        .run(command)
        .map_err(|source| BridgeError::Launch {
            command: command.to_string(),
            source,
        })?;

    tracing::info!("command exited with status {code}");

    Ok(code)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn passes_exit_codes_through() {
        assert_eq!(SystemShell.run("exit 0").unwrap(), 0);
        assert_eq!(SystemShell.run("exit 3").unwrap(), 3);
        assert_eq!(execute(&SystemShell, "exit 42").unwrap(), 42);
    }

    #[test]
    fn hands_the_whole_string_to_the_interpreter() {
        // quoting and variable expansion are left to the interpreter
        assert_eq!(SystemShell.run("x=7; exit \"$x\"").unwrap(), 7);
    }

    #[test]
    fn signalled_children_map_to_one() {
        assert_eq!(SystemShell.run("kill -9 $$").unwrap(), 1);
    }
}
