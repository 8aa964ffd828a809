//! Report construction.
//!
//! Building a [`Report`] probes the machine immediately: host details,
//! interpreter, every package in the [`PackageSet`], and (optionally) the
//! GPU. After that the report is read-only, except that the Ansys
//! environment variables are re-read from the process each time the report
//! is formatted.

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use super::packages::PackageSet;
use super::project_info::{format_project_info, process_env};
use crate::error::{ReportError, Result};
use crate::probe::{HostInfo, InterpreterInfo, Introspector, PackageVersion, PythonIntrospector};

/// Label of the placeholder GPU row.
pub const GPU_DETAILS: &str = "GPU Details";

const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %Z";

/// Caller-supplied report options.
///
/// # Example
///
/// ```
/// use ansys_report::ReportOptions;
///
/// let options = ReportOptions::new()
///     .gpu(false)
///     .ansys_lib("MyLib1", "v1.2")
///     .ansys_vars(["MYVAR_1"]);
/// assert_eq!(options.ncol, 3);
/// assert_eq!(options.text_width, 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Extra packages to report, listed before the core set.
    pub additional: Vec<String>,
    /// Package columns in the HTML table.
    pub ncol: usize,
    /// Width of the text rendering.
    pub text_width: usize,
    /// Sort packages alphabetically.
    pub sort: bool,
    /// Query GPU details.
    pub gpu: bool,
    /// Environment variables to list, when set.
    pub ansys_vars: Option<Vec<String>>,
    /// Ansys libraries and their versions.
    pub ansys_libs: Option<BTreeMap<String, String>>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            additional: Vec::new(),
            ncol: 3,
            text_width: 80,
            sort: false,
            gpu: true,
            ansys_vars: None,
            ansys_libs: None,
        }
    }
}

impl ReportOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add packages to the report.
    pub fn additional<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the number of HTML package columns.
    pub fn ncol(mut self, ncol: usize) -> Self {
        self.ncol = ncol;
        self
    }

    /// Set the text rendering width.
    pub fn text_width(mut self, width: usize) -> Self {
        self.text_width = width;
        self
    }

    /// Sort packages alphabetically.
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Enable or disable GPU probing.
    pub fn gpu(mut self, gpu: bool) -> Self {
        self.gpu = gpu;
        self
    }

    /// Set the environment variables of interest.
    pub fn ansys_vars<I, S>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ansys_vars = Some(vars.into_iter().map(Into::into).collect());
        self
    }

    /// Record one Ansys library version.
    pub fn ansys_lib(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.ansys_libs
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), version.into());
        self
    }

    /// Replace the Ansys library map.
    pub fn ansys_libs(mut self, libs: BTreeMap<String, String>) -> Self {
        self.ansys_libs = Some(libs);
        self
    }
}

/// A package row as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRow {
    /// Import name.
    pub name: String,
    /// What the probe found.
    pub version: PackageVersion,
}

/// The software and environment report.
///
/// # Example
///
/// ```no_run
/// use ansys_report::{Report, ReportOptions};
///
/// let report = Report::new(ReportOptions::new().ansys_lib("MyLib1", "v1.2")).unwrap();
/// println!("{}", report);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    date: String,
    platform: HostInfo,
    extra_meta: Vec<(String, String)>,
    python: Option<InterpreterInfo>,
    #[serde(skip)]
    package_set: PackageSet,
    packages: Vec<PackageRow>,
    ansys_libs: Option<BTreeMap<String, String>>,
    ansys_vars: Option<Vec<String>>,
    #[serde(skip)]
    ncol: usize,
    #[serde(skip)]
    text_width: usize,
}

impl Report {
    /// Build a report by probing the first Python interpreter found.
    pub fn new(options: ReportOptions) -> Result<Self> {
        Self::with_introspector(options, &PythonIntrospector::detect())
    }

    /// Build a report using the given introspector.
    pub fn with_introspector(options: ReportOptions, probe: &dyn Introspector) -> Result<Self> {
        let platform = probe.host()?;
        let python = probe.interpreter();
        let package_set = PackageSet::for_host(&platform, python.as_ref());
        tracing::debug!(
            "Probing {} core, {} optional, {} additional packages",
            package_set.core().len(),
            package_set.optional().len(),
            options.additional.len()
        );

        let extra_meta = gpu_details(options.gpu, probe);
        let packages = collect_packages(&options.additional, &package_set, options.sort, probe)?;

        Ok(Self {
            date: chrono::Local::now().format(DATE_FORMAT).to_string(),
            platform,
            extra_meta,
            python,
            package_set,
            packages,
            ansys_libs: options.ansys_libs,
            ansys_vars: options.ansys_vars,
            ncol: options.ncol.max(1),
            text_width: options.text_width,
        })
    }

    /// Number of logical CPUs.
    pub fn cpu_count(&self) -> usize {
        self.platform.cpu_count
    }

    /// Pointer width, e.g. `64bit`.
    pub fn architecture(&self) -> &str {
        &self.platform.architecture
    }

    /// Operating system name.
    pub fn system(&self) -> &str {
        &self.platform.system
    }

    /// Machine type.
    pub fn machine(&self) -> &str {
        &self.platform.machine
    }

    /// Host details.
    pub fn platform(&self) -> &HostInfo {
        &self.platform
    }

    /// When the report was built.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The interpreter packages were probed with.
    pub fn python(&self) -> Option<&InterpreterInfo> {
        self.python.as_ref()
    }

    /// The core and optional package lists.
    pub fn package_set(&self) -> &PackageSet {
        &self.package_set
    }

    /// Package rows in display order.
    pub fn packages(&self) -> &[PackageRow] {
        &self.packages
    }

    /// Auxiliary rows (GPU details).
    pub fn extra_meta(&self) -> &[(String, String)] {
        &self.extra_meta
    }

    /// Ansys libraries supplied by the caller.
    pub fn ansys_libs(&self) -> Option<&BTreeMap<String, String>> {
        self.ansys_libs.as_ref()
    }

    /// Environment variables of interest supplied by the caller.
    pub fn ansys_vars(&self) -> Option<&[String]> {
        self.ansys_vars.as_deref()
    }

    /// HTML package columns.
    pub fn ncol(&self) -> usize {
        self.ncol
    }

    /// Text rendering width.
    pub fn text_width(&self) -> usize {
        self.text_width
    }

    /// Ansys installation and environment-variable blocks, read from the
    /// live process environment.
    pub fn project_info(&self) -> String {
        self.project_info_with_env(process_env())
    }

    /// Same as [`Report::project_info`] against a supplied environment.
    pub fn project_info_with_env<I>(&self, env: I) -> String
    where
        I: IntoIterator<Item = (String, String)>,
    {
        format_project_info(self.ansys_libs.as_ref(), self.ansys_vars.as_deref(), env)
    }

    /// JSON form of the report.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::Other(e.into()))
    }
}

/// GPU rows, or a placeholder.
///
/// Every failure of the GPU query is swallowed, panics included: the report
/// exists to describe broken rendering setups.
fn gpu_details(enabled: bool, probe: &dyn Introspector) -> Vec<(String, String)> {
    if !enabled {
        return vec![(GPU_DETAILS.to_string(), "None".to_string())];
    }

    match panic::catch_unwind(AssertUnwindSafe(|| probe.gpu())) {
        Ok(Ok(rows)) => rows,
        Ok(Err(e)) => {
            tracing::debug!("GPU query failed: {:#}", e);
            vec![(GPU_DETAILS.to_string(), "error".to_string())]
        }
        Err(_) => {
            tracing::debug!("GPU query panicked");
            vec![(GPU_DETAILS.to_string(), "error".to_string())]
        }
    }
}

/// Probe every package once and lay the rows out in display order:
/// additional, then core, then optional. Missing optional packages are
/// dropped and a name listed twice keeps its first position.
fn collect_packages(
    additional: &[String],
    set: &PackageSet,
    sort: bool,
    probe: &dyn Introspector,
) -> Result<Vec<PackageRow>> {
    let mut names: Vec<String> = Vec::new();
    for name in additional.iter().chain(set.core()).chain(set.optional()) {
        if !names.contains(name) {
            names.push(name.clone());
        }
    }

    let probed = probe.probe(&names)?;
    let lookup = |name: &str| {
        probed
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .unwrap_or(PackageVersion::NotFound)
    };

    let mut rows: Vec<PackageRow> = Vec::new();
    let required = additional.iter().chain(set.core()).map(|n| (n, false));
    let optional = set.optional().iter().map(|n| (n, true));
    for (name, is_optional) in required.chain(optional) {
        if rows.iter().any(|r| &r.name == name) {
            continue;
        }
        let version = lookup(name);
        if is_optional && !version.is_found() {
            continue;
        }
        rows.push(PackageRow {
            name: name.clone(),
            version,
        });
    }

    if sort {
        rows.sort_by_key(|r| r.name.to_lowercase());
    }
    Ok(rows)
}
