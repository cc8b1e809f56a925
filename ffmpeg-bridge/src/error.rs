use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("environment variable {variable} is not set")]
    MissingLauncher { variable: &'static str },
    #[error("could not launch the command interpreter for `{command}`")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BridgeError>;
