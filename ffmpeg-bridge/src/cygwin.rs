use std::ffi::OsString;
use std::io::Write;

use crate::error::BridgeError;
use crate::error::Result;
use crate::shell;
use crate::shell::ShellRunner;

/// Environment variable holding the path to the Cygwin launcher
pub const LAUNCHER_VARIABLE: &str = "CYGWIN_LAUNCHER";

const INTERPRETER: &str = "powershell.exe -Command";

/// Configuration of the Cygwin bridge, loaded once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CygwinConfig {
    launcher: String,
}

impl CygwinConfig {
    pub fn new(launcher: impl Into<String>) -> Self {
        Self {
            launcher: launcher.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|variable| std::env::var_os(variable))
    }

    /// Resolve the launcher through `lookup`. An empty value is treated the same
    /// as an unset one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        match lookup(LAUNCHER_VARIABLE) {
            Some(launcher) if !launcher.is_empty() => {
                Ok(Self::new(launcher.to_string_lossy().into_owned()))
            }
            _ => Err(BridgeError::MissingLauncher {
                variable: LAUNCHER_VARIABLE,
            }),
        }
    }

    #[must_use]
    pub fn launcher(&self) -> &str {
        &self.launcher
    }
}

#[derive(Debug, Clone)]
pub struct CygwinBridge {
    config: CygwinConfig,
}

impl CygwinBridge {
    #[must_use]
    pub const fn new(config: CygwinConfig) -> Self {
        Self { config }
    }

    /// `powershell.exe -Command "<launcher>" "ffmpeg <args...>"`
    ///
    /// Arguments are interpolated as they are, without escaping.
    pub fn command<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut command = format!("{INTERPRETER} \"{}\" \"ffmpeg", self.config.launcher);

        for arg in args {
            command.push(' ');
            command.push_str(arg.as_ref());
        }

        command.push('"');
        command
    }

    /// Echo the assembled command to `out` as `Command: ...`, then execute it
    /// and return its exit code.
    pub fn run<S, R, W>(&self, args: &[S], runner: &R, out: &mut W) -> Result<i32>
    where
        S: AsRef<str>,
        R: ShellRunner + ?Sized,
        W: Write,
    {
        let command = self.command(args);

        if let Err(error) = writeln!(out, "Command: {command}").and_then(|()| out.flush()) {
            tracing::warn!("could not echo command: {error}");
        }

        shell::execute(runner, &command)
    }
}
