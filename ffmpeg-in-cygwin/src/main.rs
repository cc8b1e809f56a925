#![warn(clippy::all, clippy::nursery, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use color_eyre::Result;
use ffmpeg_bridge::CygwinBridge;
use ffmpeg_bridge::CygwinConfig;
use ffmpeg_bridge::SystemShell;

fn main() -> Result<()> {
    // File logging is optional; its worker guard has to outlive the child to flush
    let guard = ffmpeg_bridge::logging::setup("ffmpeg_in_cygwin")?;

    let config = CygwinConfig::from_env().inspect_err(|error| tracing::error!("{error}"))?;
    let args = ffmpeg_bridge::forwarded_args();

    tracing::info!("forwarding {} arguments to {}", args.len(), config.launcher());

    let code = CygwinBridge::new(config).run(&args, &SystemShell, &mut std::io::stdout())?;

    drop(guard);
    std::process::exit(code)
}
