#![warn(clippy::all, clippy::nursery, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cygwin;
pub mod error;
pub mod logging;
pub mod shell;
pub mod wsl;

pub use cygwin::CygwinBridge;
pub use cygwin::CygwinConfig;
pub use error::BridgeError;
pub use shell::ShellRunner;
pub use shell::SystemShell;
pub use wsl::GuestScript;
pub use wsl::WslBridge;

/// Everything after the program name, in order. Arguments that are not valid
/// Unicode are converted lossily since they end up in a single command string.
#[must_use]
pub fn forwarded_args() -> Vec<String> {
    std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
