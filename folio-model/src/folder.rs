//! Shared-folder types for the Folio admin surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Folder record as returned by the admin listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    /// Unique folder identifier
    pub id: Uuid,
    /// Folder name shown in listings
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Number of documents currently stored in the folder
    pub document_count: u64,
    /// Users the folder is shared with
    #[serde(default)]
    pub member_ids: Vec<Uuid>,
    /// Timestamp of folder creation
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a folder
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member_ids: Vec<Uuid>,
}

/// Partial update of a folder; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<Uuid>>,
}
