#![warn(clippy::all, clippy::nursery, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use color_eyre::Result;
use ffmpeg_bridge::SystemShell;
use ffmpeg_bridge::WslBridge;

fn main() -> Result<()> {
    // File logging is optional; its worker guard has to outlive the child to flush
    let guard = ffmpeg_bridge::logging::setup("ffmpeg_in_wsl")?;

    let args = ffmpeg_bridge::forwarded_args();

    tracing::info!("forwarding {} arguments to wsl", args.len());

    let code = WslBridge::default().run(&args, &SystemShell)?;

    drop(guard);
    std::process::exit(code)
}
