// ABOUTME: Row and input types for every persisted surface
// ABOUTME: Vision, OKRs, user stories, comments, and architecture elements

use archstudio_core::CanvasType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use sqlx::FromRow;

/// Narrative fields of the project's product vision.
///
/// Also used as the replacement payload: every field is written, absent
/// ones as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vision {
    pub vision: String,
    pub target_audience: String,
    pub value_proposition: String,
    pub timeline: String,
    pub budget: String,
    pub success_metric: String,
}

/// Objective with its key results kept as the exact JSON the client sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Okr {
    pub id: i64,
    pub objective: String,
    pub key_results: Box<RawValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OkrInput {
    pub objective: String,
    pub key_results: Box<RawValue>,
}

/// Result of deleting an OKR; `id` is `None` when nothing matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkrDeletion {
    pub success: bool,
    pub id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserStory {
    pub id: i64,
    pub role: String,
    pub action: String,
    pub benefit: String,
    pub priority: String,
    pub epic: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserStoryCreateInput {
    pub role: String,
    pub action: String,
    pub benefit: String,
    pub priority: String,
    pub epic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub story_id: i64,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentCreateInput {
    pub story_id: i64,
    pub author: String,
    pub text: String,
}

/// Positioned node on a diagram canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ArchitectureElement {
    pub id: i64,
    #[serde(rename = "type")]
    pub element_type: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[sqlx(try_from = "String")]
    pub canvas_type: CanvasType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArchitectureElementCreateInput {
    pub element_type: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementPosition {
    pub x: f64,
    pub y: f64,
}
