//! CLI output formatting for catalog check results.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every work is its semantic identity (order and title), with the source
//! file shown as an indented `Source:` line and problems indented beneath it.
//!
//! ```text
//! Works
//! 001 First Light
//!     Source: first-light.mdx
//! 002 Tide Studies
//!     Source: tide-studies.mdx
//!     Problem: year 1800 is out of range (1900-2100)
//!
//! 2 works, 1 problem
//! ```
//!
//! Format functions are pure — they return `Vec<String>` and perform no I/O —
//! so tests can assert on exact lines. `print_*` wrappers write to stdout.

use crate::catalog::{Catalog, WorkReport};

/// Render the full check report as display lines.
pub fn format_check_output(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec!["Works".to_string()];
    for work in &catalog.works {
        lines.push(work_header(work));
        lines.push(format!("    Source: {}", work.path));
        for problem in &work.problems {
            lines.push(format!("    Problem: {problem}"));
        }
    }
    lines.push(String::new());
    lines.push(summary_line(catalog));
    lines
}

fn work_header(work: &WorkReport) -> String {
    match &work.artwork {
        Some(artwork) => format!("{:03} {}", artwork.order, artwork.title),
        None => "--- (failed to load)".to_string(),
    }
}

fn summary_line(catalog: &Catalog) -> String {
    format!(
        "{} {}, {} {}",
        catalog.works.len(),
        plural(catalog.works.len(), "work"),
        catalog.problem_count(),
        plural(catalog.problem_count(), "problem"),
    )
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Print the check report to stdout.
pub fn print_check_output(catalog: &Catalog) {
    for line in format_check_output(catalog) {
        println!("{line}");
    }
}
