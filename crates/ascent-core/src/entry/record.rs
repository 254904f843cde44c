//! The normalized record handed to the persistence layer.

use serde::{Deserialize, Serialize};

use super::types::{Attempts, Effort, TickType};

/// A submitted climb log entry.
///
/// Optional keys are omitted from the serialized form rather than written
/// as empty strings, empty arrays, or nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    /// Route name, trimmed
    pub name: String,

    /// Grade label from the grade catalog
    pub grade: String,

    pub tick_type: TickType,

    /// Present only when `tick_type` is `attempt`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<Attempts>,

    /// Height in feet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Minutes spent on the wall
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_on_wall: Option<f64>,

    pub effort: Effort,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub physical_skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technical_skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> EntryRecord {
        EntryRecord {
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
        }
    }

    #[test]
    fn test_minimal_record_omits_optional_keys() {
        let value = serde_json::to_value(minimal()).unwrap();
        assert_eq!(
            value,
            json!({"name": "Crimpy", "grade": "5.10a", "tickType": "send", "effort": 7})
        );
    }

    #[test]
    fn test_full_record_uses_camel_case_keys() {
        let record = EntryRecord {
            tick_type: TickType::Attempt,
            attempts: Attempts::new(2),
            height: Some(45.0),
            time_on_wall: Some(12.5),
            notes: Some("pumped".to_string()),
            physical_skills: vec!["crimp".to_string()],
            technical_skills: vec!["heel hook".to_string()],
            location: Some("Gym X".to_string()),
            ..minimal()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["tickType"], json!("attempt"));
        assert_eq!(value["attempts"], json!(2));
        assert_eq!(value["timeOnWall"], json!(12.5));
        assert_eq!(value["physicalSkills"], json!(["crimp"]));
        assert_eq!(value["technicalSkills"], json!(["heel hook"]));

        let parsed: EntryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, record);
    }
}
