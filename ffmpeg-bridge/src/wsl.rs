use std::borrow::Cow;

use crate::error::Result;
use crate::shell;
use crate::shell::ShellRunner;

/// Shell variable the guest prelude stores the host address in
pub const HOST_IP_VARIABLE: &str = "$host_ip";

const LAUNCHER: &str = "wsl.exe -e bash -c";
const LOCALHOST: &str = "localhost";
const LOOPBACK_IPV4: &str = "127.0.0.1";

// Both literals are cut out with the same fixed length; changing one of them
// without the other has to fail here rather than corrupt arguments.
const LOOPBACK_LEN: usize = 9;
const _: () = assert!(LOCALHOST.len() == LOOPBACK_LEN && LOOPBACK_IPV4.len() == LOOPBACK_LEN);

/// The guest-side shell prelude run before ffmpeg: resolve the Windows host
/// address from the default route into `host_ip` and export `XAUTHORITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestScript {
    pub version: u32,
    pub xauthority: &'static str,
}

impl GuestScript {
    pub const V1: Self = Self {
        version: 1,
        xauthority: "/tmp/.scrypted_btop/Xauthority",
    };

    #[must_use]
    pub fn prelude(&self) -> String {
        format!(
            r#"host_ip=$(ip route | awk "/default/ {{print \$3}}"); export XAUTHORITY={};"#,
            self.xauthority
        )
    }
}

impl Default for GuestScript {
    fn default() -> Self {
        Self::V1
    }
}

/// Replace the first `localhost`, or failing that the first `127.0.0.1`, with
/// [`HOST_IP_VARIABLE`]. At most one substitution is made.
#[must_use]
pub fn rewrite_loopback(arg: &str) -> Cow<'_, str> {
    let Some(start) = arg.find(LOCALHOST).or_else(|| arg.find(LOOPBACK_IPV4)) else {
        return Cow::Borrowed(arg);
    };

    let mut rewritten = arg.to_string();
    rewritten.replace_range(start..start + LOOPBACK_LEN, HOST_IP_VARIABLE);
    Cow::Owned(rewritten)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WslBridge {
    script: GuestScript,
}

impl WslBridge {
    #[must_use]
    pub const fn new(script: GuestScript) -> Self {
        Self { script }
    }

    #[must_use]
    pub const fn script(&self) -> GuestScript {
        self.script
    }

    pub fn rewrite_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
        args.iter()
            .map(|arg| {
                let arg = arg.as_ref();
                let rewritten = rewrite_loopback(arg);
                if let Cow::Owned(ref replaced) = rewritten {
                    tracing::debug!("rewrote loopback argument {arg} to {replaced}");
                }

                rewritten.into_owned()
            })
            .collect()
    }

    /// `wsl.exe -e bash -c '<prelude> ffmpeg <rewritten args...>'`
    ///
    /// Arguments are interpolated as they are, without escaping.
    pub fn command<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut command = format!("{LAUNCHER} '{} ffmpeg", self.script.prelude());

        for arg in Self::rewrite_args(args) {
            command.push(' ');
            command.push_str(&arg);
        }

        command.push('\'');
        command
    }

    /// Execute the assembled command and return its exit code. Unlike the
    /// Cygwin bridge nothing is echoed.
    pub fn run<S, R>(&self, args: &[S], runner: &R) -> Result<i32>
    where
        S: AsRef<str>,
        R: ShellRunner + ?Sized,
    {
        tracing::debug!("guest script version {}", self.script.version);
        shell::execute(runner, &self.command(args))
    }
}
