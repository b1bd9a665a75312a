//! JSON output.
//!
//! The whole [`Report`] is serialized pretty-printed, including each entry's
//! extraction `status` so consumers can tell "no facts" from "extraction
//! failed".

use crate::models::Report;
use std::error::Error;

pub fn report_to_json(report: &Report) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractionStatus, ReportEntry, ReportSection};

    #[test]
    fn test_status_is_serialized() {
        let report = Report::new(vec![ReportSection {
            heading: "S".to_string(),
            entries: vec![ReportEntry {
                title: "T".to_string(),
                url: "U".to_string(),
                facts: vec![],
                status: ExtractionStatus::MalformedResponse,
            }],
        }]);

        let json = report_to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "News Report");
        assert_eq!(value["sections"][0]["entries"][0]["status"], "malformed_response");
        assert_eq!(value["sections"][0]["entries"][0]["facts"], serde_json::json!([]));
    }
}
