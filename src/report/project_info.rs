//! Ansys installation and environment-variable blocks.
//!
//! These two blocks are appended after the package listing. Their layout is
//! relied on by people grepping bug reports, so it is kept byte-stable:
//! library rows are `{name}       {version}` (seven spaces, no alignment) and
//! variable rows left-justify the name to 30 columns.

use std::collections::BTreeMap;

const INSTALL_TITLE: &str = "Ansys Installation";
const VARIABLES_TITLE: &str = "Ansys Environment Variables";
const NO_INSTALLATIONS: &str = "No Ansys installations provided";
const NO_VARIABLES: &str = "None";

/// Render the installation block followed by the environment-variable block.
///
/// `env` is the environment to scan, in the order it should be listed.
/// Variables are only scanned when at least one library was supplied.
pub fn format_project_info<I>(
    libs: Option<&BTreeMap<String, String>>,
    vars: Option<&[String]>,
    env: I,
) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let libs = libs.filter(|l| !l.is_empty());

    let mut lines = vec![
        "\n".to_string(),
        INSTALL_TITLE.to_string(),
        "*".repeat(INSTALL_TITLE.len()),
    ];
    match libs {
        None => lines.push(NO_INSTALLATIONS.to_string()),
        Some(libs) => {
            lines.push("Version   Location".to_string());
            lines.push("------------------".to_string());
            // BTreeMap iterates in ascending key order.
            for (name, version) in libs {
                lines.push(format!("{}       {}", name, version));
            }
        }
    }
    let install_info = lines.join("\n");

    let mut env_lines = vec![
        format!("\n\n\n{}", VARIABLES_TITLE),
        "*".repeat(VARIABLES_TITLE.len()),
    ];
    let mut matched = 0;
    // TODO: decide with maintainers whether the variable scan should stop
    // depending on libraries being supplied.
    if libs.is_some() {
        let wanted = vars.unwrap_or_default();
        for (key, value) in env {
            if wanted.contains(&key) {
                env_lines.push(format!("{:<30} {}", key, value));
                matched += 1;
            }
        }
    }
    if matched == 0 {
        env_lines.push(NO_VARIABLES.to_string());
    }
    let env_info = env_lines.join("\n");

    install_info + &env_info
}

/// Snapshot of the live process environment, in enumeration order.
///
/// Names and values that are not valid Unicode are converted lossily, so a
/// requested variable is still listed.
pub fn process_env() -> Vec<(String, String)> {
    std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect()
}
