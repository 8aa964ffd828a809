//! Text and HTML rendering.
//!
//! The text layout follows the long-standing `scooby` report format so that
//! reports pasted into issues look familiar: a dashed rule, the date,
//! right-aligned `key : value` rows, the interpreter banner, then one row
//! per package.

use std::fmt;

use maud::{html, Markup};

use super::builder::Report;

/// Width of the rule above the title.
pub const DIVIDER_WIDTH: usize = 79;

/// Title line of the full report.
pub const TITLE: &str = "PyAnsys Software and Environment Report";

const MIN_ROW_WIDTH: usize = 18;
const MAX_ROW_WIDTH: usize = 40;

const DATE_CELL: &str =
    "text-align: center; font-weight: bold; font-size: 1.2em; border: 2px solid #fff;";
const KEY_CELL: &str = "text-align: right; background-color: #ccc; border: 2px solid #fff;";
const VALUE_CELL: &str = "text-align: left; border: 2px solid #fff;";
const EMPTY_CELL: &str = "border: 2px solid #fff;";

impl Report {
    /// Platform and extra metadata rows, in display order.
    fn platform_rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("OS".to_string(), self.system().to_string()),
            ("CPU(s)".to_string(), self.cpu_count().to_string()),
            ("Machine".to_string(), self.machine().to_string()),
            ("Architecture".to_string(), self.architecture().to_string()),
            ("Environment".to_string(), "Python".to_string()),
        ];
        rows.extend(self.extra_meta().iter().cloned());
        rows
    }

    fn python_banner(&self) -> String {
        match self.python() {
            Some(python) => format!("Python {}", python.sys_version),
            None => "Python (interpreter not found)".to_string(),
        }
    }

    /// The base report body, without the title or project information.
    pub fn render_base(&self) -> String {
        let width = self.text_width();
        let mut text = format!("\n{}\n", "-".repeat(width));

        let date_label = "  Date: ";
        for (i, line) in wrap(self.date(), width.saturating_sub(date_label.len()))
            .iter()
            .enumerate()
        {
            let prefix = if i == 0 {
                date_label.to_string()
            } else {
                " ".repeat(date_label.len())
            };
            text.push_str(&format!("{}{}\n", prefix, line));
        }
        text.push('\n');

        let row_width = self
            .packages()
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(MIN_ROW_WIDTH, MAX_ROW_WIDTH);

        for (key, value) in self.platform_rows() {
            text.push_str(&format!("{:>w$} : {}\n", key, value, w = row_width));
        }

        text.push('\n');
        for line in wrap(&self.python_banner(), width.saturating_sub(4)) {
            text.push_str(&format!("  {}\n", line));
        }

        if !self.packages().is_empty() {
            text.push('\n');
        }
        for package in self.packages() {
            text.push_str(&format!(
                "{:>w$} : {}\n",
                package.name,
                package.version,
                w = row_width
            ));
        }

        text.push_str(&"-".repeat(width));
        text
    }

    /// The full text report: title, base body, then project information.
    pub fn render(&self) -> String {
        self.render_with_project_info(&self.project_info())
    }

    fn render_with_project_info(&self, project_info: &str) -> String {
        let report = format!(
            "{}\n{}{}{}",
            "-".repeat(DIVIDER_WIDTH),
            TITLE,
            self.render_base(),
            project_info
        );
        shorten_rules(&report)
    }

    fn html_table(&self) -> Markup {
        let ncol = self.ncol().max(1);
        let span = 2 * ncol;
        let packages: Vec<(String, String)> = self
            .packages()
            .iter()
            .map(|p| (p.name.clone(), p.version.to_string()))
            .collect();

        html! {
            table style="border: 1.5px solid;" {
                tr {
                    td style=(DATE_CELL) colspan=(span) { (self.date()) }
                }
                (cell_rows(&self.platform_rows(), ncol))
                tr {
                    td style=(VALUE_CELL) colspan=(span) { (self.python_banner()) }
                }
                (cell_rows(&packages, ncol))
            }
        }
    }

    /// The base report as an HTML table.
    pub fn render_base_html(&self) -> String {
        self.html_table().into_string()
    }

    /// The full HTML report: title, table, then project information.
    pub fn render_html(&self) -> String {
        html! {
            h3 { (TITLE) }
            (self.html_table())
            pre { (self.project_info()) }
        }
        .into_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Lay out `(key, value)` pairs `ncol` to a row, padding the last row.
fn cell_rows(pairs: &[(String, String)], ncol: usize) -> Markup {
    html! {
        @for chunk in pairs.chunks(ncol) {
            tr {
                @for (key, value) in chunk {
                    td style=(KEY_CELL) { (key) }
                    td style=(VALUE_CELL) { (value) }
                }
                @for _ in chunk.len()..ncol {
                    td style=(EMPTY_CELL) {}
                    td style=(EMPTY_CELL) {}
                }
            }
        }
    }
}

/// Replace every run of exactly 80 dashes with 79.
///
/// The base body draws its rules at the text width, which is one wider than
/// the title rule at the default width.
pub fn shorten_rules(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;

    let flush = |out: &mut String, run: usize| {
        let n = if run == 80 { 79 } else { run };
        out.push_str(&"-".repeat(n));
    };

    for ch in text.chars() {
        if ch == '-' {
            run += 1;
            continue;
        }
        flush(&mut out, run);
        run = 0;
        out.push(ch);
    }
    flush(&mut out, run);
    out
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::fake::FakeIntrospector;
    use crate::probe::PackageVersion;
    use crate::ReportOptions;

    fn report(options: ReportOptions) -> Report {
        let probe = FakeIntrospector::linux(10)
            .with_package("numpy", PackageVersion::Installed("1.26.4".into()))
            .with_package("tqdm", PackageVersion::VersionUnknown);
        Report::with_introspector(options, &probe).unwrap()
    }

    fn header() -> String {
        format!("{}\n{}", "-".repeat(79), TITLE)
    }

    #[test]
    fn render_starts_with_title() {
        let out = report(ReportOptions::new()).render();
        assert!(out.starts_with(&header()));
    }

    #[test]
    fn render_ends_with_variables_block() {
        let out = report(ReportOptions::new()).render();
        assert!(out.ends_with("\nAnsys Environment Variables\n***************************\nNone"));
    }

    #[test]
    fn render_has_no_eighty_dash_rules() {
        let out = report(ReportOptions::new()).render();
        assert!(!out.contains(&"-".repeat(80)));
        assert!(out.contains(&"-".repeat(79)));
    }

    #[test]
    fn display_matches_render() {
        let report = report(ReportOptions::new().gpu(false));
        let displayed = report.to_string();
        let rendered = report.render();
        // Dates are fixed at construction, so both renders agree.
        assert_eq!(displayed, rendered);
    }

    #[test]
    fn base_lists_platform_and_packages() {
        let base = report(ReportOptions::new().gpu(false)).render_base();
        assert!(base.contains(&format!("{:>18} : Linux\n", "OS")));
        assert!(base.contains(&format!("{:>18} : 8\n", "CPU(s)")));
        assert!(base.contains(&format!("{:>18} : x86_64\n", "Machine")));
        assert!(base.contains(&format!("{:>18} : 64bit\n", "Architecture")));
        assert!(base.contains(&format!("{:>18} : None\n", "GPU Details")));
        assert!(base.contains(&format!("{:>18} : 1.26.4\n", "numpy")));
        assert!(base.contains(&format!("{:>18} : Version unknown\n", "tqdm")));
        assert!(base.contains(&format!("{:>18} : Module not found\n", "scipy")));
        assert!(base.contains("  Python 3.10.4 (main) [GCC 11.4.0]\n"));
    }

    #[test]
    fn base_rules_follow_text_width() {
        let base = report(ReportOptions::new().text_width(60)).render_base();
        assert!(base.starts_with(&format!("\n{}\n  Date: ", "-".repeat(60))));
        assert!(base.ends_with(&"-".repeat(60)));
    }

    #[test]
    fn long_package_names_widen_rows() {
        let name = "ansys.platform.instancemanagement";
        let base = report(ReportOptions::new().additional([name])).render_base();
        let expected = format!("{} : Module not found", name);
        assert!(base.lines().any(|l| l == expected));
        assert!(base.contains(&format!("{:>33} : Linux", "OS")));
    }

    #[test]
    fn missing_interpreter_is_stated() {
        let mut probe = FakeIntrospector::linux(10);
        probe.interpreter = None;
        let report = Report::with_introspector(ReportOptions::new(), &probe).unwrap();
        assert!(report.render_base().contains("  Python (interpreter not found)\n"));
    }

    #[test]
    fn html_lays_out_columns() {
        let html = report(ReportOptions::new().ncol(2).gpu(false)).render_base_html();
        assert!(html.starts_with("<table"));
        assert!(html.ends_with("</table>"));
        assert!(html.contains("colspan=\"4\""));
        assert!(html.contains(">numpy</td>"));
        assert!(html.contains(">1.26.4</td>"));
    }

    #[test]
    fn html_report_escapes_project_info() {
        let html = report(ReportOptions::new().ansys_lib("<Lib>", "v&1")).render_html();
        assert!(html.contains(TITLE));
        assert!(html.contains("&lt;Lib&gt;       v&amp;1"));
        assert!(!html.contains("<Lib>"));
    }

    #[test]
    fn html_pads_short_rows_and_escapes_cells() {
        let html = report(ReportOptions::new().ncol(3).additional(["a<b"])).render_base_html();
        assert!(html.contains(">a&lt;b</td>"));
        // Seven platform rows leave the third row short.
        assert!(html.contains(&format!("<td style=\"{}\"></td>", EMPTY_CELL)));
    }

    #[test]
    fn zero_columns_render_as_one() {
        let html = report(ReportOptions::new().ncol(0).gpu(false)).render_base_html();
        assert!(html.contains("colspan=\"2\""));
        assert!(html.contains(">numpy</td><td"));
    }

    #[test]
    fn narrow_text_width_still_renders() {
        let base = report(ReportOptions::new().text_width(2)).render_base();
        assert!(base.starts_with("\n--\n  Date: "));
        assert!(base.ends_with("\n--"));
    }

    #[test]
    fn shorten_rules_only_touches_exact_runs() {
        let eighty = "-".repeat(80);
        let seventy_nine = "-".repeat(79);
        let eighty_one = "-".repeat(81);

        assert_eq!(shorten_rules(&eighty), seventy_nine);
        assert_eq!(shorten_rules(&format!("a{}b", eighty)), format!("a{}b", seventy_nine));
        assert_eq!(shorten_rules(&eighty_one), eighty_one);
        assert_eq!(shorten_rules("--- x --"), "--- x --");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("one two three", 7), ["one two", "three"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    }
}
