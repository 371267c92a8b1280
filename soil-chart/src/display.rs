//! Best-effort hand-off of the written chart to the desktop image viewer.
//!
//! Showing the chart is optional: a headless session or a missing viewer
//! only logs a warning, it never fails the report.

use log::{info, warn};
use std::{path::Path, process::Command};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOutcome {
    Opened,
    Skipped(String),
}

/// Open `path` in the platform viewer without waiting for it to close.
pub fn present(path: &Path) -> DisplayOutcome {
    if is_headless(|key| std::env::var_os(key).is_some()) {
        let reason = "no display server available".to_string();
        warn!("Not showing {}: {}", path.display(), reason);
        return DisplayOutcome::Skipped(reason);
    }
    match viewer_command(path).spawn() {
        Ok(_child) => {
            info!("Opened {} in the system viewer", path.display());
            DisplayOutcome::Opened
        }
        Err(e) => {
            let reason = format!("failed to launch viewer: {e}");
            warn!("Not showing {}: {}", path.display(), reason);
            DisplayOutcome::Skipped(reason)
        }
    }
}

/// Only X11/Wayland sessions advertise themselves through the environment;
/// macOS and Windows always have a window system.
pub fn is_headless<F: Fn(&str) -> bool>(env_is_set: F) -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return false;
    }
    !env_is_set("DISPLAY") && !env_is_set("WAYLAND_DISPLAY")
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn test_headless_without_display_vars() {
        assert!(is_headless(|_| false));
        assert!(!is_headless(|key| key == "DISPLAY"));
        assert!(!is_headless(|key| key == "WAYLAND_DISPLAY"));
    }

    #[test]
    fn test_viewer_command_targets_file() {
        let path = Path::new("soil_moisture_analysis.png");
        let cmd = viewer_command(path);
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.last().copied(), Some(path.as_os_str()));
    }
}
