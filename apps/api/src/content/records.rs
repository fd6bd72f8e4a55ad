//! Record shapes returned by the content source, one per topic.
//!
//! The source is a spreadsheet, so a cell may arrive as a string, a number, a
//! boolean or not at all. Every text field goes through [`lenient_text`] so a
//! missing cell becomes `""` and never the text `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Deserializes any JSON scalar into a string; `null` and absent become `""`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct SidebarItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
}

/// One entry of the JSON array stored in a `social` sidebar cell.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AboutItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subskill: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub project_url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub languages: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub institution: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub certificate_url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CertificationRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub certificate_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub certificate_url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub platform: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub certificate_image: String,
}

/// Decodes every record of a slice, skipping (and logging) the ones that are
/// not objects of the expected shape.
pub fn decode_records<T>(topic: &str, slice: &[Value]) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    slice
        .iter()
        .enumerate()
        .filter_map(|(i, value)| match T::deserialize(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(topic, index = i, "skipping undecodable record: {e}");
                None
            }
        })
        .collect()
}
