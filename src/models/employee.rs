use serde::Serialize;

/// Employee profile as exposed by `rasreport me`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub site: Option<String>,
    pub level: Option<String>,
    pub company: Option<String>,
    pub active: bool,
    pub created_at: String, // ⇔ employees.created_at (TEXT, ISO8601)
}
