//! Shared API types for the datadesk workspace panel.
//!
//! This crate is the **single source of truth** for the panel's
//! request/response types. The backend and the panel controller import
//! these types directly; TypeScript declarations for the web frontend are
//! generated via `ts-rs` behind the `ts` feature.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Chat platforms ──────────────────────────────────────────────────────────

/// Source platform a chat transcript was exported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum ChatPlatform {
    #[default]
    Whatsapp,
    Teams,
    Slack,
}

impl ChatPlatform {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Teams => "teams",
            Self::Slack => "slack",
        }
    }
}

impl std::fmt::Display for ChatPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Documents ───────────────────────────────────────────────────────────────

/// A set of ingested files treated as one retrievable unit.
///
/// Never patched in place client-side — the panel re-fetches the whole list
/// after any mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct DocumentCollection {
    pub collection_id: String,
    /// File names in ingestion order. Empty only transiently.
    #[serde(default)]
    pub file_names: Vec<String>,
    /// Count of indexed sub-documents; may differ from the file count.
    #[serde(default)]
    pub document_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Response to a multi-file document upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct UploadDocumentsResponse {
    /// Number of files the server accepted; deduplication may make this
    /// differ from the number submitted.
    pub file_count: u64,
}

// ─── Chats ───────────────────────────────────────────────────────────────────

/// One imported chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct ChatCollection {
    pub collection_id: String,
    pub file_name: String,
    #[serde(default)]
    pub message_count: u64,
    pub platform: ChatPlatform,
}

/// Envelope form of the chat list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct ChatListEnvelope {
    pub collections: Vec<ChatCollection>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// The chat list endpoint returns either a bare sequence of collections or
/// an envelope carrying the sequence plus a count. Both are success shapes;
/// anything else decodes to `Unrecognized` and renders as an empty list.
#[derive(Debug, Clone)]
pub enum ChatListResponse {
    Collections(Vec<ChatCollection>),
    Envelope(ChatListEnvelope),
    Unrecognized,
}

impl ChatListResponse {
    /// Decode a chat list body, discriminating on the envelope field.
    pub fn from_value(value: serde_json::Value) -> Self {
        if value
            .as_object()
            .is_some_and(|obj| obj.contains_key("collections"))
        {
            match serde_json::from_value::<ChatListEnvelope>(value) {
                Ok(envelope) => Self::Envelope(envelope),
                Err(_) => Self::Unrecognized,
            }
        } else if value.is_array() {
            match serde_json::from_value::<Vec<ChatCollection>>(value) {
                Ok(collections) => Self::Collections(collections),
                Err(_) => Self::Unrecognized,
            }
        } else {
            Self::Unrecognized
        }
    }

    pub fn into_collections(self) -> Vec<ChatCollection> {
        match self {
            Self::Collections(collections) => collections,
            Self::Envelope(envelope) => envelope.collections,
            Self::Unrecognized => Vec::new(),
        }
    }
}

/// Response to a chat transcript upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct UploadChatResponse {
    /// Number of messages the server parsed out of the transcript.
    pub message_count: u64,
}

// ─── Tables ──────────────────────────────────────────────────────────────────

/// Base record for one table exposed by the backend's data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct TableSummary {
    pub name: String,
    /// Absent when the backend has not computed it.
    #[serde(default)]
    pub row_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct TableListResponse {
    #[serde(default)]
    pub tables: Vec<TableSummary>,
}

/// One column of a table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct ColumnDescriptor {
    pub name: String,
    /// Backend-defined type name.
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
}

fn default_nullable() -> bool {
    true
}

/// Per-table detail: schema columns plus illustrative sample rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct TableDetailResponse {
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    #[cfg_attr(feature = "ts", ts(type = "any[]"))]
    #[serde(default)]
    pub sample_data: Vec<serde_json::Value>,
}

// ─── Acknowledgements ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct OkResponse {
    pub ok: bool,
}
