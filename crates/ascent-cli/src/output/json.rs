//! JSON output formatting for records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ascent_core::EntryRecord;

/// A submitted record with the moment it was logged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedRecord<'a> {
    pub grading_system: &'a str,
    pub logged_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: &'a EntryRecord,
}

/// Convert a record to a single-line JSON object.
pub fn record_json(
    record: &EntryRecord,
    grading_system: &str,
    logged_at: DateTime<Utc>,
) -> anyhow::Result<String> {
    let logged = LoggedRecord {
        grading_system,
        logged_at,
        record,
    };
    Ok(serde_json::to_string(&logged)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_core::{Effort, TickType};
    use chrono::TimeZone;

    #[test]
    fn test_record_json_flattens_record() {
        let record = EntryRecord {
            name: "Crimpy".to_string(),
            grade: "5.10a".to_string(),
            tick_type: TickType::Send,
            attempts: None,
            height: None,
            time_on_wall: None,
            effort: Effort::default(),
            notes: None,
            physical_skills: Vec::new(),
            technical_skills: Vec::new(),
            location: None,
        };
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let line = record_json(&record, "yds", at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["name"], "Crimpy");
        assert_eq!(value["tickType"], "send");
        assert_eq!(value["gradingSystem"], "yds");
        assert_eq!(value["loggedAt"], "2026-01-02T03:04:05Z");
        assert!(value.get("attempts").is_none());
        assert!(!line.contains('\n'));
    }
}
