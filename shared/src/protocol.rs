//! REST wire types.
//!
//! Field names and casing mirror the backend's JSON exactly; the client
//! never renames on the wire. Response types keep timestamps as the raw
//! ISO strings the server sends (see [`crate::date`] for display).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

// =========================================================
// Constants
// =========================================================

/// localStorage key holding the raw bearer token. The only key this
/// client owns.
pub const TOKEN_STORAGE_KEY: &str = "token";

// =========================================================
// Enums
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    #[default]
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Capitalized form for option labels.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =========================================================
// Auth / users
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub manager_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Serialized as explicit `null` for managers, omitted when an
    /// employee leaves it blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<Option<i64>>,
}

/// 4xx bodies carry `{ "detail": "..." }`; surfaced verbatim when present.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

// =========================================================
// Feedback (manager -> employee)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub id: i64,
    pub employee_id: i64,
    pub strengths: String,
    pub areas_to_improve: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub acknowledged: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackCreate {
    pub employee_id: i64,
    pub strengths: String,
    pub areas_to_improve: String,
    pub sentiment: Sentiment,
}

/// PATCH body; absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedbackUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas_to_improve: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

// =========================================================
// Peer feedback
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerFeedbackResponse {
    pub id: i64,
    #[serde(default)]
    pub from_employee_id: Option<i64>,
    /// None when the author chose anonymity.
    #[serde(default)]
    pub from_employee_name: Option<String>,
    pub to_employee_id: i64,
    pub strengths: String,
    pub areas_to_improve: String,
    pub sentiment: Sentiment,
    pub is_anonymous: bool,
    pub acknowledged: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeerFeedbackCreate {
    pub to_employee_id: i64,
    pub strengths: String,
    pub areas_to_improve: String,
    pub sentiment: Sentiment,
    pub is_anonymous: bool,
}

// =========================================================
// Announcements
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub manager_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnouncementCreate {
    pub title: String,
    pub content: String,
}

// =========================================================
// Documents
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub filename: String,
    pub file_size: u64,
    pub is_public: bool,
    pub employee_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentUpdate {
    pub title: String,
    pub description: String,
    pub is_public: bool,
}

// =========================================================
// Assignments / submissions
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    pub filename: String,
    pub file_size: u64,
    pub manager_name: String,
    #[serde(default)]
    pub submission_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub id: i64,
    pub assignment_id: i64,
    pub employee_name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub filename: String,
    pub file_size: u64,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

// =========================================================
// Comments (feedback and assignment threads)
// =========================================================

/// Shared shape of both comment families. The parent id
/// (`feedback_id` / `assignment_id`) is implied by the endpoint the
/// list was fetched from, so the client does not carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackCommentCreate {
    pub feedback_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentCommentCreate {
    pub assignment_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentUpdate {
    pub content: String,
}

// =========================================================
// Notifications
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub message: String,
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =========================================================
// Dashboard summaries
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerDashboardResponse {
    pub team_size: u32,
    pub feedback_count: u32,
    /// Keyed by sentiment string (`positive` / `neutral` / `negative`).
    #[serde(default)]
    pub sentiment_trends: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDashboardResponse {
    #[serde(default)]
    pub feedback_timeline: Vec<FeedbackResponse>,
}

#[cfg(test)]
mod tests;
