use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Result name used when a resume carries no `name`.
pub const UNNAMED_RESUME: &str = "Unnamed Resume";

/// A candidate resume as submitted to `/rank_resumes`.
///
/// Every field is optional. A field holding the wrong JSON type is coerced to its
/// empty default rather than failing the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Resume {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub portfolio: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub mobile: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub technical_skills: TechnicalSkills,
    #[serde(deserialize_with = "lenient_seq")]
    pub projects: Vec<DescribedEntry>,
    #[serde(deserialize_with = "lenient_seq")]
    pub experience: Vec<DescribedEntry>,
    #[serde(deserialize_with = "lenient_seq")]
    pub publications: Vec<DescribedEntry>,
    #[serde(deserialize_with = "lenient_seq")]
    pub extra_curricular_activities: Vec<DescribedEntry>,
}

impl Resume {
    /// Name reported in the ranking output.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_RESUME)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TechnicalSkills {
    #[serde(deserialize_with = "lenient_strings")]
    pub programming_languages: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub frameworks_libraries: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub tools_platforms: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub soft_skills: Vec<String>,
}

/// A project, job, publication or activity. Only its description is scored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DescribedEntry {
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// One row of the ranking output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub name: String,
    pub percentage_match: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field coercion
// ────────────────────────────────────────────────────────────────────────────

/// Deserializes `T`, falling back to `T::default()` when the JSON value has the wrong shape.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Deserializes an array element by element; malformed elements become `T::default()`.
/// Anything that is not an array yields an empty vector.
pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Keeps only the string elements of an array.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_resume_deserializes() {
        let resume: Resume = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "technical_skills": {
                "programming_languages": ["Rust", "Python"],
                "soft_skills": ["Mentoring"]
            },
            "projects": [{"description": "Built a compiler", "title": "ignored"}],
            "experience": [{"description": "Systems engineer"}]
        }))
        .unwrap();

        assert_eq!(resume.name.as_deref(), Some("Ada"));
        assert_eq!(
            resume.technical_skills.programming_languages,
            vec!["Rust", "Python"]
        );
        assert_eq!(resume.projects[0].description.as_deref(), Some("Built a compiler"));
        assert!(resume.publications.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let resume: Resume = serde_json::from_value(json!({})).unwrap();
        assert_eq!(resume, Resume::default());
        assert_eq!(resume.display_name(), UNNAMED_RESUME);
    }

    #[test]
    fn test_null_name_is_unnamed() {
        let resume: Resume = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(resume.display_name(), "Unnamed Resume");
    }

    #[test]
    fn test_wrong_types_are_coerced() {
        let resume: Resume = serde_json::from_value(json!({
            "name": 42,
            "technical_skills": "Rust, Go",
            "projects": "not a list",
            "experience": [7, {"description": 3}, {"description": "kept"}]
        }))
        .unwrap();

        assert_eq!(resume.name, None);
        assert_eq!(resume.technical_skills, TechnicalSkills::default());
        assert!(resume.projects.is_empty());
        assert_eq!(resume.experience.len(), 3);
        assert_eq!(resume.experience[0].description, None);
        assert_eq!(resume.experience[1].description, None);
        assert_eq!(resume.experience[2].description.as_deref(), Some("kept"));
    }

    #[test]
    fn test_non_string_skills_are_skipped() {
        let skills: TechnicalSkills = serde_json::from_value(json!({
            "tools_platforms": ["Docker", 1, null, "Kubernetes"]
        }))
        .unwrap();
        assert_eq!(skills.tools_platforms, vec!["Docker", "Kubernetes"]);
    }

    #[test]
    fn test_ranked_result_serializes() {
        let result = RankedResult {
            name: "A".to_string(),
            percentage_match: 42.5,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"name": "A", "percentage_match": 42.5}));
    }
}
