//! Package probing through a Python interpreter.
//!
//! The packages in a report are Python packages, so the only reliable way to
//! learn their versions is to ask the interpreter that would import them.
//! Each query is one short `python -c` invocation that prints a single JSON
//! document on its last line of stdout.
//!
//! # Example
//!
//! ```no_run
//! use ansys_report::probe::{Introspector, PythonIntrospector};
//!
//! let probe = PythonIntrospector::detect();
//! let versions = probe.probe(&["numpy".to_string()]).unwrap();
//! for (name, version) in versions {
//!     println!("{}: {}", name, version);
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use anyhow::{bail, Context};
use regex::Regex;
use serde::Deserialize;

use super::{HostInfo, InterpreterInfo, Introspector, PackageVersion};
use crate::error::{ReportError, Result};

/// Environment variable naming the interpreter to probe with.
pub const PYTHON_ENV_VAR: &str = "ANSYS_REPORT_PYTHON";

/// Executable names tried on PATH, in order.
const CANDIDATES: &[&str] = &["python3", "python"];

static RE_SYS_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

const SYS_VERSION_SCRIPT: &str = "import sys; print(sys.version.replace('\\n', ' '))";

const PACKAGES_SCRIPT: &str = r#"
import importlib, json, sys
try:
    import importlib.metadata as md
except ImportError:
    md = None
rows = []
for name in sys.argv[1:]:
    try:
        mod = importlib.import_module(name)
    except Exception:
        rows.append([name, "not_found", None])
        continue
    ver = None
    for attr in ("__version__", "version", "__VERSION__"):
        val = getattr(mod, attr, None)
        if isinstance(val, str):
            ver = val
            break
    if ver is None and md is not None:
        try:
            ver = md.version(name.split(".")[0])
        except Exception:
            pass
    rows.append([name, "installed" if ver else "unknown", ver])
print(json.dumps(rows))
"#;

const GPU_SCRIPT: &str = r#"
import json
try:
    from pyvista import GPUInfo
except ImportError:
    from pyvista.utilities.errors import GPUInfo
print(json.dumps([[str(k), str(v)] for k, v in GPUInfo().get_info()]))
"#;

/// One row of the package probe payload: `[name, status, version]`.
#[derive(Debug, Deserialize)]
struct ProbeRow(String, String, Option<String>);

/// Introspector backed by a Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonIntrospector {
    executable: Option<PathBuf>,
}

impl PythonIntrospector {
    /// Use a specific interpreter.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(executable.into()),
        }
    }

    /// An introspector with no interpreter: every package is reported missing.
    pub fn unavailable() -> Self {
        Self { executable: None }
    }

    /// Find an interpreter from `ANSYS_REPORT_PYTHON`, then PATH.
    pub fn detect() -> Self {
        Self::detect_with_env(|key: &str| std::env::var(key), &parse_system_path())
    }

    /// Find an interpreter with a custom env var lookup and PATH (for testing).
    pub fn detect_with_env<F>(env_fn: F, path_entries: &[PathBuf]) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        if let Ok(explicit) = env_fn(PYTHON_ENV_VAR) {
            if !explicit.trim().is_empty() {
                tracing::debug!("Using interpreter from {}: {}", PYTHON_ENV_VAR, explicit);
                return Self::new(explicit);
            }
        }

        for name in CANDIDATES {
            if let Some(found) = resolve_tool_path(name, path_entries) {
                tracing::debug!("Using interpreter found on PATH: {}", found.display());
                return Self::new(found);
            }
        }

        tracing::debug!("No Python interpreter found");
        Self::unavailable()
    }

    /// The interpreter in use, if any.
    pub fn executable(&self) -> Option<&Path> {
        self.executable.as_deref()
    }

    fn label(&self) -> String {
        self.executable
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<none>".to_string())
    }

    /// Run a script and return the last non-empty stdout line.
    fn run_script(&self, script: &str, args: &[String]) -> anyhow::Result<String> {
        let Some(exe) = &self.executable else {
            bail!("no Python interpreter available");
        };

        tracing::debug!("Running {} -c <script> with {} args", exe.display(), args.len());
        let output = Command::new(exe)
            .arg("-c")
            .arg(script)
            .args(args)
            .output()
            .with_context(|| format!("failed to launch {}", exe.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let last = stderr.lines().rev().find(|l| !l.trim().is_empty());
            bail!(
                "{} exited with {}: {}",
                exe.display(),
                output.status,
                last.unwrap_or("no error output")
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .map(|l| l.trim().to_string())
            .context("interpreter produced no output")
    }
}

impl Introspector for PythonIntrospector {
    fn host(&self) -> Result<HostInfo> {
        HostInfo::current()
    }

    fn interpreter(&self) -> Option<InterpreterInfo> {
        match self.run_script(SYS_VERSION_SCRIPT, &[]) {
            Ok(line) => parse_sys_version(&line),
            Err(e) => {
                tracing::debug!("Interpreter query failed: {:#}", e);
                None
            }
        }
    }

    fn probe(&self, names: &[String]) -> Result<Vec<(String, PackageVersion)>> {
        if self.executable.is_none() || names.is_empty() {
            return Ok(names
                .iter()
                .map(|n| (n.clone(), PackageVersion::NotFound))
                .collect());
        }

        let line =
            self.run_script(PACKAGES_SCRIPT, names)
                .map_err(|e| ReportError::ProbeFailed {
                    interpreter: self.label(),
                    message: format!("{:#}", e),
                })?;

        parse_probe_output(&line).map_err(|message| ReportError::ProbeFailed {
            interpreter: self.label(),
            message,
        })
    }

    fn gpu(&self) -> anyhow::Result<Vec<(String, String)>> {
        let line = self.run_script(GPU_SCRIPT, &[])?;
        parse_gpu_output(&line)
    }
}

/// Parse a `sys.version` banner into interpreter info.
pub fn parse_sys_version(banner: &str) -> Option<InterpreterInfo> {
    let caps = RE_SYS_VERSION.captures(banner)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let micro = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    Some(InterpreterInfo {
        version: (major, minor, micro),
        sys_version: banner.trim().to_string(),
    })
}

/// Parse the package probe payload.
pub fn parse_probe_output(line: &str) -> std::result::Result<Vec<(String, PackageVersion)>, String> {
    let rows: Vec<ProbeRow> =
        serde_json::from_str(line).map_err(|e| format!("unexpected probe output: {}", e))?;

    rows.into_iter()
        .map(|ProbeRow(name, status, version)| {
            let version = match (status.as_str(), version) {
                ("installed", Some(v)) => PackageVersion::Installed(v),
                ("installed", None) | ("unknown", _) => PackageVersion::VersionUnknown,
                ("not_found", _) => PackageVersion::NotFound,
                (other, _) => return Err(format!("unknown status '{}' for {}", other, name)),
            };
            Ok((name, version))
        })
        .collect()
}

fn parse_gpu_output(line: &str) -> anyhow::Result<Vec<(String, String)>> {
    let rows: Vec<(String, String)> =
        serde_json::from_str(line).context("unexpected GPU probe output")?;
    Ok(rows)
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for name in executable_names(tool) {
            let candidate = dir.join(&name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

fn executable_names(tool: &str) -> Vec<String> {
    if cfg!(windows) {
        vec![format!("{}.exe", tool), tool.to_string()]
    } else {
        vec![tool.to_string()]
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path, body: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    fn no_env(_: &str) -> std::result::Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    #[test]
    fn parse_sys_version_full_banner() {
        let info = parse_sys_version("3.10.12 (main, Jun 11 2023, 05:26:28) [GCC 11.4.0]").unwrap();
        assert_eq!(info.version, (3, 10, 12));
        assert_eq!(info.minor(), 10);
        assert!(info.sys_version.starts_with("3.10.12 (main"));
    }

    #[test]
    fn parse_sys_version_without_micro() {
        let info = parse_sys_version("3.8 (default)").unwrap();
        assert_eq!(info.version, (3, 8, 0));
    }

    #[test]
    fn parse_sys_version_rejects_garbage() {
        assert!(parse_sys_version("not a version").is_none());
        assert!(parse_sys_version("").is_none());
    }

    #[test]
    fn parse_probe_output_maps_statuses() {
        let line = r#"[["numpy","installed","1.26.4"],["pyiges","not_found",null],["tqdm","unknown",null]]"#;
        let rows = parse_probe_output(line).unwrap();
        assert_eq!(
            rows,
            vec![
                ("numpy".to_string(), PackageVersion::Installed("1.26.4".into())),
                ("pyiges".to_string(), PackageVersion::NotFound),
                ("tqdm".to_string(), PackageVersion::VersionUnknown),
            ]
        );
    }

    #[test]
    fn parse_probe_output_rejects_bad_json() {
        let err = parse_probe_output("Traceback (most recent call last):").unwrap_err();
        assert!(err.contains("unexpected probe output"));
    }

    #[test]
    fn parse_probe_output_rejects_unknown_status() {
        let err = parse_probe_output(r#"[["numpy","weird",null]]"#).unwrap_err();
        assert!(err.contains("weird"));
    }

    #[test]
    fn parse_gpu_output_reads_pairs() {
        let rows = parse_gpu_output(r#"[["GPU Vendor","NVIDIA"],["GPU Version","4.5"]]"#).unwrap();
        assert_eq!(rows[0], ("GPU Vendor".to_string(), "NVIDIA".to_string()));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn unavailable_reports_everything_missing() {
        let probe = PythonIntrospector::unavailable();
        let rows = probe.probe(&["numpy".to_string()]).unwrap();
        assert_eq!(rows, vec![("numpy".to_string(), PackageVersion::NotFound)]);
        assert!(probe.interpreter().is_none());
        assert!(probe.gpu().is_err());
    }

    #[test]
    fn detect_prefers_env_var() {
        let probe = PythonIntrospector::detect_with_env(
            |key| {
                if key == PYTHON_ENV_VAR {
                    Ok("/opt/python/bin/python3".to_string())
                } else {
                    Err(std::env::VarError::NotPresent)
                }
            },
            &[],
        );
        assert_eq!(probe.executable(), Some(Path::new("/opt/python/bin/python3")));
    }

    #[test]
    fn detect_ignores_blank_env_var() {
        let probe = PythonIntrospector::detect_with_env(|_| Ok("  ".to_string()), &[]);
        assert!(probe.executable().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn detect_searches_path_in_candidate_order() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("python"), "exit 0");
        create_fake_binary(&dir_b.join("python3"), "exit 0");

        let probe = PythonIntrospector::detect_with_env(no_env, &[dir_a, dir_b.clone()]);
        assert_eq!(probe.executable(), Some(dir_b.join("python3").as_path()));
    }

    #[test]
    fn detect_without_interpreter_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let probe = PythonIntrospector::detect_with_env(no_env, &[temp.path().to_path_buf()]);
        assert!(probe.executable().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn probe_runs_interpreter_and_parses_last_line() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("python3");
        create_fake_binary(
            &exe,
            r#"echo "some import noise"
echo '[["numpy","installed","1.26.4"],["scipy","not_found",null]]'"#,
        );

        let probe = PythonIntrospector::new(&exe);
        let rows = probe
            .probe(&["numpy".to_string(), "scipy".to_string()])
            .unwrap();
        assert_eq!(rows[0].1, PackageVersion::Installed("1.26.4".into()));
        assert_eq!(rows[1].1, PackageVersion::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn probe_failure_is_reported_with_interpreter() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("python3");
        create_fake_binary(&exe, "echo 'boom' >&2\nexit 3");

        let err = PythonIntrospector::new(&exe)
            .probe(&["numpy".to_string()])
            .unwrap_err();
        match err {
            ReportError::ProbeFailed {
                interpreter,
                message,
            } => {
                assert!(interpreter.ends_with("python3"));
                assert!(message.contains("boom"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn interpreter_reads_sys_version() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("python3");
        create_fake_binary(&exe, "echo '3.8.10 (default, Nov 22 2023) [GCC 9.4.0]'");

        let info = PythonIntrospector::new(&exe).interpreter().unwrap();
        assert_eq!(info.version, (3, 8, 10));
    }

    #[cfg(unix)]
    #[test]
    fn gpu_failure_surfaces_as_error() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("python3");
        create_fake_binary(&exe, "echo 'Segmentation fault' >&2\nexit 139");

        let err = PythonIntrospector::new(&exe).gpu().unwrap_err();
        assert!(format!("{:#}", err).contains("Segmentation fault"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::write(dir_a.join("python3"), "not executable").unwrap();
        fs::set_permissions(dir_a.join("python3"), fs::Permissions::from_mode(0o644)).unwrap();
        create_fake_binary(&dir_b.join("python3"), "exit 0");

        let result = resolve_tool_path("python3", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("python3")));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }
}
