//! Host platform classification and the command tables keyed by it.
//!
//! The platform is a closed two-variant enum mapped to structured
//! [`CommandLine`] values, so the install/update/build triple can never get
//! out of sync across OS families.

use crate::models::{CommandLine, CommandSet};
use std::path::Path;

/// OS family of the host, detected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// Detect the platform of the current host.
    pub fn detect() -> Self {
        Platform::from_os_name(std::env::consts::OS)
    }

    /// Classify an OS name: a case-insensitive "win" prefix selects Windows,
    /// anything else is treated as POSIX-like.
    pub fn from_os_name(name: &str) -> Self {
        if name.to_ascii_lowercase().starts_with("win") {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// The install/update/build command triple for this platform.
    ///
    /// Windows commands go through `cmd.exe /c` so that `npm`/`grunt` batch
    /// shims resolve.
    pub fn command_set(&self) -> CommandSet {
        match self {
            Platform::Windows => CommandSet {
                install: CommandLine::new(
                    "cmd.exe",
                    &["/c", "npm", "install", "grunt", "--save-dev"],
                ),
                update: CommandLine::new("cmd.exe", &["/c", "npm", "install"]),
                build: CommandLine::new("cmd.exe", &["/c", "grunt"]),
            },
            Platform::Posix => CommandSet {
                install: CommandLine::new("npm", &["install", "grunt", "--save-dev"]),
                update: CommandLine::new("npm", &["install"]),
                build: CommandLine::new("grunt", &[]),
            },
        }
    }

    /// Recursive copy command staging the contents of `src` into `dest`.
    ///
    /// Windows uses `xcopy` with overwrite; POSIX uses `cp -rf` with a
    /// trailing `/.` on the source so the directory contents are copied
    /// rather than the directory itself.
    pub fn copy_command(&self, src: &Path, dest: &Path) -> CommandLine {
        let src = src.display().to_string();
        let dest = dest.display().to_string();
        match self {
            Platform::Windows => CommandLine::new(
                "cmd.exe",
                &["/c", "xcopy", &src, &dest, "/S", "/E", "/Y"],
            ),
            Platform::Posix => CommandLine::new("cp", &["-rf", &format!("{src}/."), &dest]),
        }
    }
}
