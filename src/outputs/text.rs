//! Plain text output.
//!
//! ```text
//! News Report
//! ==================================================
//!
//! Section 1: NewsAPI Articles
//! --------------------------------------------------
//!
//! Title: Apple earnings
//! URL: https://example.com/apple
//! Facts:
//! - 1. Apple reported revenue of $90 billion.
//! ```

use crate::models::{Report, ReportEntry};

const SEPARATOR_WIDTH: usize = 50;

pub fn report_to_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&report.title);
    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push_str("\n\n");

    for (i, section) in report.sections.iter().enumerate() {
        out.push_str(&format!("Section {}: {}\n", i + 1, section.heading));
        out.push_str(&"-".repeat(SEPARATOR_WIDTH));
        out.push_str("\n\n");

        for entry in &section.entries {
            push_entry(&mut out, entry);
        }
    }
    out.push('\n');
    out
}

fn push_entry(out: &mut String, entry: &ReportEntry) {
    out.push_str(&format!("Title: {}\n", entry.title));
    out.push_str(&format!("URL: {}\n", entry.url));
    out.push_str("Facts:\n");
    for fact in &entry.facts {
        out.push_str(&format!("- {fact}\n"));
    }
    out.push('\n');
}
