//! Host and package introspection.
//!
//! The report never inspects packages itself. Everything it knows about the
//! machine comes through the [`Introspector`] trait, which keeps the report
//! assembly deterministic under test.
//!
//! # Modules
//!
//! - [`host`] - Host platform details (CPU count, OS, machine, architecture)
//! - [`python`] - Package and GPU probing through a Python interpreter

pub mod host;
pub mod python;

pub use host::HostInfo;
pub use python::PythonIntrospector;

use serde::Serialize;
use std::fmt;

use crate::error::Result;

/// What the probe learned about a single package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "version", rename_all = "snake_case")]
pub enum PackageVersion {
    /// Package imported and reported this version.
    Installed(String),
    /// Package imported but exposes no version.
    VersionUnknown,
    /// Package could not be imported.
    NotFound,
}

impl PackageVersion {
    /// Whether the package could be imported at all.
    pub fn is_found(&self) -> bool {
        !matches!(self, PackageVersion::NotFound)
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageVersion::Installed(v) => write!(f, "{}", v),
            PackageVersion::VersionUnknown => write!(f, "Version unknown"),
            PackageVersion::NotFound => write!(f, "Module not found"),
        }
    }
}

/// The interpreter the packages were probed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpreterInfo {
    /// `(major, minor, micro)`.
    pub version: (u32, u32, u32),
    /// Full banner, e.g. `3.10.12 (main, Jun 11 2023, 05:26:28) [GCC 11.4.0]`.
    pub sys_version: String,
}

impl InterpreterInfo {
    /// Minor version component.
    pub fn minor(&self) -> u32 {
        self.version.1
    }
}

/// Capability interface over the machine being reported on.
///
/// Implementations may block on subprocesses. None of the methods are
/// expected to be cheap.
pub trait Introspector {
    /// Host platform details. Failing here aborts report construction.
    fn host(&self) -> Result<HostInfo>;

    /// The interpreter used for package probing, if one is available.
    fn interpreter(&self) -> Option<InterpreterInfo>;

    /// Probe each named package, preserving the order of `names`.
    fn probe(&self, names: &[String]) -> Result<Vec<(String, PackageVersion)>>;

    /// GPU capability rows as `(label, value)` pairs.
    ///
    /// Rendering drivers can fail in arbitrary ways, so callers must treat
    /// any error from here as non-fatal.
    fn gpu(&self) -> anyhow::Result<Vec<(String, String)>>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_version_display() {
        assert_eq!(PackageVersion::Installed("1.26.4".into()).to_string(), "1.26.4");
        assert_eq!(PackageVersion::VersionUnknown.to_string(), "Version unknown");
        assert_eq!(PackageVersion::NotFound.to_string(), "Module not found");
    }

    #[test]
    fn package_version_is_found() {
        assert!(PackageVersion::Installed("1.0".into()).is_found());
        assert!(PackageVersion::VersionUnknown.is_found());
        assert!(!PackageVersion::NotFound.is_found());
    }

    #[test]
    fn package_version_serializes_tagged() {
        let json = serde_json::to_string(&PackageVersion::Installed("2.0".into())).unwrap();
        assert_eq!(json, r#"{"status":"installed","version":"2.0"}"#);
        let json = serde_json::to_string(&PackageVersion::NotFound).unwrap();
        assert_eq!(json, r#"{"status":"not_found"}"#);
    }

    #[test]
    fn interpreter_minor() {
        let info = InterpreterInfo {
            version: (3, 8, 10),
            sys_version: "3.8.10".into(),
        };
        assert_eq!(info.minor(), 8);
    }
}
