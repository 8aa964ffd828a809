//! Configuration loading for report defaults.
//!
//! A project can keep its report settings (libraries, variables of
//! interest, interpreter) in `report.yml` so users only need to run
//! `ansys-report`. Command-line flags override the file.
//!
//! # Example
//!
//! ```
//! use ansys_report::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("report.yml"), "ansys_vars: [AWP_ROOT241]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.ansys_vars, Some(vec!["AWP_ROOT241".to_string()]));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAMES};
pub use schema::ReportConfig;
