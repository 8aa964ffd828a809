//! Report assembly and rendering.
//!
//! - [`packages`] - Which packages are probed
//! - [`builder`] - [`Report`] construction and options
//! - [`project_info`] - Ansys installation and environment-variable blocks
//! - [`render`] - Text and HTML output

pub mod builder;
pub mod packages;
pub mod project_info;
pub mod render;

pub use builder::{PackageRow, Report, ReportOptions, GPU_DETAILS};
pub use packages::PackageSet;
pub use project_info::{format_project_info, process_env};
pub use render::{shorten_rules, DIVIDER_WIDTH, TITLE};
