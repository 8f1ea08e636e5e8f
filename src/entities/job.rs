use serde::{Deserialize, Serialize};

/// Contract type of a posting, serialized with the labels the mobile
/// client displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Freelance,
    Daily,
    Internship,
}

/// A job posting. The `wilaya` tag uses the `"NN-Name"` form
/// (e.g. `"16-Alger"`) so postings can be filtered by province.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub employer_id: String,
    pub employer_name: String,
    pub employer_avatar: String,
    pub wilaya: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    pub category: String,
    pub posted_at: String,
    #[serde(default)]
    pub is_featured: bool,
    pub requires_experience: bool,
}

/// A job sector with its bilingual display labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCategory {
    pub id: String,
    pub icon: String,
    pub label_ar: String,
    pub label_fr: String,
}
