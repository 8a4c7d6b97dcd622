//! The persisted progression record
//!
//! One JSON object under a single key. Missing or `null` fields fall back to
//! their defaults; the level is derived and never stored.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub xp: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visited_sections: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub examined_projects: Vec<String>,
    /// Epoch milliseconds
    pub first_visit: Option<i64>,
    /// Epoch milliseconds
    pub last_visit: Option<i64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PersistedRecord {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_stored_layout() {
        let record = PersistedRecord {
            xp: 120,
            achievements: vec!["firstSteps".to_string()],
            visited_sections: vec!["about".to_string()],
            examined_projects: vec![],
            first_visit: Some(1_700_000_000_000),
            last_visit: None,
        };
        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert_eq!(json["xp"], 120);
        assert_eq!(json["visitedSections"][0], "about");
        assert!(json["examinedProjects"].as_array().unwrap().is_empty());
        assert_eq!(json["firstVisit"], 1_700_000_000_000i64);
        assert!(json["lastVisit"].is_null());
        assert!(json.get("level").is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let record = PersistedRecord::from_json(r#"{"xp": 40, "unknown": true}"#).unwrap();
        assert_eq!(record.xp, 40);
        assert!(record.achievements.is_empty());
        assert_eq!(record.first_visit, None);
    }

    #[test]
    fn test_null_timestamps_parse() {
        let record =
            PersistedRecord::from_json(r#"{"firstVisit": null, "lastVisit": 5}"#).unwrap();
        assert_eq!(record.first_visit, None);
        assert_eq!(record.last_visit, Some(5));
    }

    #[test]
    fn test_null_fields_default() {
        let record = PersistedRecord::from_json(
            r#"{"xp": null, "achievements": ["firstSteps"], "visitedSections": null, "examinedProjects": null}"#,
        )
        .unwrap();
        assert_eq!(record.xp, 0);
        assert_eq!(record.achievements, vec!["firstSteps".to_string()]);
        assert!(record.visited_sections.is_empty());
        assert!(record.examined_projects.is_empty());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(PersistedRecord::from_json("{not json").is_err());
        assert!(PersistedRecord::from_json(r#"{"xp": "lots"}"#).is_err());
    }
}
