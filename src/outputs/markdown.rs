//! Markdown output.
//!
//! One `##` heading per section and one linked `###` heading per article,
//! followed by the facts as a bullet list. Articles without facts keep their
//! heading and an empty list.

use crate::models::Report;

pub fn report_to_markdown(report: &Report) -> String {
    let mut md = format!("# {}\n\n", report.title);
    md.push_str(&format!(
        "_Generated {}_\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M")
    ));

    for section in &report.sections {
        md.push_str(&format!("## {}\n\n", section.heading));
        for entry in &section.entries {
            md.push_str(&format!(
                "### [{}](<{}>)\n\n",
                escape_link_text(&entry.title),
                entry.url
            ));
            for fact in &entry.facts {
                md.push_str(&format!("- {fact}\n"));
            }
            if !entry.facts.is_empty() {
                md.push('\n');
            }
        }
    }
    md
}

fn escape_link_text(s: &str) -> String {
    s.replace('[', "\\[").replace(']', "\\]")
}
