//! Configuration file schema.
//!
//! ```yaml
//! additional: [ansys.mapdl.core]
//! ncol: 3
//! text_width: 80
//! sort: false
//! gpu: true
//! python: /opt/ansys/python/bin/python3
//! ansys_vars: [AWP_ROOT241, ANSYSLMD_LICENSE_FILE]
//! ansys_libs:
//!   ansys-mapdl-core: 0.68.0
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::report::ReportOptions;

/// Contents of `report.yml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Extra packages to report.
    pub additional: Vec<String>,
    /// HTML package columns.
    pub ncol: Option<usize>,
    /// Text rendering width.
    pub text_width: Option<usize>,
    /// Sort packages alphabetically.
    pub sort: Option<bool>,
    /// Query GPU details.
    pub gpu: Option<bool>,
    /// Interpreter used for probing.
    pub python: Option<PathBuf>,
    /// Environment variables to list.
    pub ansys_vars: Option<Vec<String>>,
    /// Ansys libraries and versions.
    pub ansys_libs: Option<BTreeMap<String, String>>,
}

impl ReportConfig {
    /// Report options with unset fields at their defaults.
    pub fn to_options(&self) -> ReportOptions {
        let defaults = ReportOptions::default();
        ReportOptions {
            additional: self.additional.clone(),
            ncol: self.ncol.unwrap_or(defaults.ncol),
            text_width: self.text_width.unwrap_or(defaults.text_width),
            sort: self.sort.unwrap_or(defaults.sort),
            gpu: self.gpu.unwrap_or(defaults.gpu),
            ansys_vars: self.ansys_vars.clone(),
            ansys_libs: self.ansys_libs.clone(),
        }
    }
}
