use std::process::Command;

fn ffmpeg_in_cygwin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ffmpeg_in_cygwin"));
    // keep test logs out of the user's data directory
    command.env("XDG_DATA_HOME", std::env::temp_dir());
    command
}

#[test]
fn missing_launcher_exits_with_one() {
    let output = ffmpeg_in_cygwin()
        .arg("-version")
        .env_remove("CYGWIN_LAUNCHER")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CYGWIN_LAUNCHER"));
    // stderr is read as ffmpeg diagnostics by the caller
    assert!(!stderr.contains('\u{1b}'));
    // the command is echoed right before execution, so nothing was run
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_launcher_exits_with_one() {
    let output = ffmpeg_in_cygwin()
        .env("CYGWIN_LAUNCHER", "")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn echoes_the_command_before_running_it() {
    let output = ffmpeg_in_cygwin()
        .arg("-version")
        .env("CYGWIN_LAUNCHER", "/usr/bin/bash")
        .output()
        .unwrap();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Command: powershell.exe -Command \"/usr/bin/bash\" \"ffmpeg -version\"\n"
    );
    // powershell.exe is not on a unix PATH, sh reports the failure
    assert!(!output.status.success());
}

#[cfg(unix)]
#[test]
fn runs_without_a_usable_log_directory() {
    let output = ffmpeg_in_cygwin()
        .arg("-version")
        .env("CYGWIN_LAUNCHER", "/usr/bin/bash")
        .env("XDG_DATA_HOME", "/dev/null/data")
        .env("TMPDIR", "/dev/null/tmp")
        .output()
        .unwrap();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Command: powershell.exe -Command \"/usr/bin/bash\" \"ffmpeg -version\"\n"
    );
    assert!(!String::from_utf8_lossy(&output.stderr).contains("log directory"));
}
