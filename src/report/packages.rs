//! The set of packages a report probes.

use serde::Serialize;

use crate::probe::{HostInfo, InterpreterInfo};

/// Packages always reported. Names are import names, not distribution names.
pub const CORE_PACKAGES: &[&str] = &[
    "matplotlib",
    "numpy",
    "pyvista",
    "appdirs",
    "tqdm",
    "pyiges",
    "scipy",
    "grpc",            // grpcio
    "google.protobuf", // protobuf
];

/// Added to the core set on Linux hosts.
pub const LINUX_CORE_PACKAGES: &[&str] = &["pexpect"];

/// Packages reported only when installed.
pub const OPTIONAL_PACKAGES: &[&str] = &["matplotlib"];

/// CORBA interop is only published for interpreters older than 3.9.
pub const LEGACY_CORBA_PACKAGE: &str = "ansys_corba";
const LEGACY_CORBA_MAX_MINOR: u32 = 9;

/// Core and optional package names, fixed once the report is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSet {
    core: Vec<String>,
    optional: Vec<String>,
}

impl PackageSet {
    /// Build the package lists for a host and interpreter.
    pub fn for_host(host: &HostInfo, interpreter: Option<&InterpreterInfo>) -> Self {
        let mut core: Vec<String> = CORE_PACKAGES.iter().map(|s| s.to_string()).collect();
        if host.is_linux() {
            core.extend(LINUX_CORE_PACKAGES.iter().map(|s| s.to_string()));
        }

        let mut optional: Vec<String> = OPTIONAL_PACKAGES.iter().map(|s| s.to_string()).collect();
        if interpreter.is_some_and(|i| i.minor() < LEGACY_CORBA_MAX_MINOR) {
            optional.push(LEGACY_CORBA_PACKAGE.to_string());
        }

        Self { core, optional }
    }

    /// Mandatory packages, absence is notable.
    pub fn core(&self) -> &[String] {
        &self.core
    }

    /// Packages whose absence is not worth showing.
    pub fn optional(&self) -> &[String] {
        &self.optional
    }
}
