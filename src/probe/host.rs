//! Host platform details.
//!
//! Values are spelled the way Python's `platform` module spells them
//! (`Linux`, `Darwin`, `AMD64`, `64bit`) so reports read the same no matter
//! which tool produced them.

use serde::Serialize;

use crate::error::{ReportError, Result};

/// Host metadata shown at the top of every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    /// Logical CPUs available to this process.
    pub cpu_count: usize,
    /// Pointer width, e.g. `64bit`.
    pub architecture: String,
    /// Operating system name, e.g. `Linux`.
    pub system: String,
    /// Machine type, e.g. `x86_64`.
    pub machine: String,
}

impl HostInfo {
    /// Detect the current host.
    pub fn current() -> Result<Self> {
        let cpu_count = std::thread::available_parallelism()
            .map(std::num::NonZero::get)
            .map_err(|e| ReportError::HostUnavailable {
                message: format!("cannot count CPUs: {}", e),
            })?;

        let pointer_width = if cfg!(target_pointer_width = "64") {
            64
        } else if cfg!(target_pointer_width = "32") {
            32
        } else {
            16
        };

        Ok(Self::from_parts(
            std::env::consts::OS,
            std::env::consts::ARCH,
            pointer_width,
            cpu_count,
        ))
    }

    /// Build host info from raw target constants.
    pub fn from_parts(os: &str, arch: &str, pointer_width: u32, cpu_count: usize) -> Self {
        Self {
            cpu_count,
            architecture: format!("{}bit", pointer_width),
            system: system_name(os),
            machine: machine_name(os, arch),
        }
    }

    /// Whether this is a Linux-family host.
    pub fn is_linux(&self) -> bool {
        self.system == "Linux"
    }
}

fn system_name(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => "Unknown".to_string(),
            }
        }
    }
}

fn machine_name(os: &str, arch: &str) -> String {
    match (os, arch) {
        ("windows", "x86_64") => "AMD64".to_string(),
        ("windows", "aarch64") => "ARM64".to_string(),
        ("macos", "aarch64") => "arm64".to_string(),
        (_, arch) => arch.to_string(),
    }
}
