//! Ansys Report - software and environment report for bug reports.
//!
//! Builds a snapshot of the machine a PyAnsys user is running on: host
//! details, the Python interpreter, installed package versions, GPU details,
//! and the Ansys libraries and environment variables the caller cares
//! about. The snapshot renders as plain text, an HTML table, or JSON.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `report.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Host and Python package introspection
//! - [`report`] - Report construction and rendering
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use ansys_report::report::format_project_info;
//!
//! let libs = BTreeMap::from([("MyLib1".to_string(), "v1.2".to_string())]);
//! let info = format_project_info(Some(&libs), None, Vec::<(String, String)>::new());
//! assert!(info.contains("MyLib1       v1.2"));
//! ```
//!
//! Building a full [`Report`] runs a Python interpreter; see the
//! integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod ui;

pub use error::{ReportError, Result};
pub use report::{Report, ReportOptions};

/// Version of this crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
