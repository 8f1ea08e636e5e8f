use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    DailyWorker,
    Regular,
    Freelancer,
    Student,
    Employer,
    ServiceProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub wilaya: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_pro: bool,
}

impl User {
    /// The demo account shown on the profile tab while there is no real
    /// authentication layer.
    pub fn demo() -> Self {
        Self {
            id: "u1".to_string(),
            name: "أحمد الجزائري".to_string(),
            role: UserRole::Regular,
            wilaya: "16-Alger".to_string(),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Ahmed".to_string(),
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
                "Arabic".to_string(),
                "French".to_string(),
            ],
            rating: 4.9,
            bio: Some("مطور برمجيات شغوف ببناء حلول تقنية تخدم المجتمع الجزائري.".to_string()),
            is_pro: true,
        }
    }
}
