use anyhow::{bail, Result};
use reqwest::multipart;

use datadesk_api::*;

/// A file selected for upload: its original name plus raw bytes.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Typed HTTP client for the datadesk backend API.
///
/// One method per endpoint. No request timeout is configured — a hung
/// request is bounded only by what the transport itself enforces.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create from an existing `reqwest::Client` (e.g. shared in tests).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    // ── Documents ─────────────────────────────────────────────────────────

    pub async fn list_documents(&self) -> Result<Vec<DocumentCollection>> {
        let resp = self.client.get(self.url("/documents")).send().await?;
        parse_response(resp).await
    }

    /// Submit all selected files as one multipart request.
    pub async fn upload_documents(
        &self,
        files: Vec<FilePayload>,
    ) -> Result<UploadDocumentsResponse> {
        let mut form = multipart::Form::new();
        for file in files {
            form = form.part("files", multipart::Part::bytes(file.bytes).file_name(file.name));
        }
        let resp = self
            .client
            .post(self.url("/documents"))
            .multipart(form)
            .send()
            .await?;
        parse_response(resp).await
    }

    pub async fn delete_document(&self, id: &str) -> Result<OkResponse> {
        let resp = self
            .client
            .delete(self.url(&format!("/documents/{id}")))
            .send()
            .await?;
        parse_response(resp).await
    }

    // ── Chats ─────────────────────────────────────────────────────────────

    /// List chat collections.
    ///
    /// The endpoint returns either a bare sequence or an envelope; both
    /// decode as success. An unrecognized body is logged and treated as an
    /// empty list rather than an error.
    pub async fn list_chats(&self) -> Result<ChatListResponse> {
        let resp = self.client.get(self.url("/chats")).send().await?;
        let value: serde_json::Value = parse_response(resp).await?;
        let decoded = ChatListResponse::from_value(value);
        if matches!(decoded, ChatListResponse::Unrecognized) {
            tracing::warn!("chat list response had an unrecognized shape, treating as empty");
        }
        Ok(decoded)
    }

    pub async fn upload_chat(
        &self,
        file: FilePayload,
        platform: ChatPlatform,
    ) -> Result<UploadChatResponse> {
        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(file.bytes).file_name(file.name))
            .text("platform", platform.as_str().to_string());
        let resp = self
            .client
            .post(self.url("/chats"))
            .multipart(form)
            .send()
            .await?;
        parse_response(resp).await
    }

    pub async fn delete_chat(&self, id: &str) -> Result<OkResponse> {
        let resp = self
            .client
            .delete(self.url(&format!("/chats/{id}")))
            .send()
            .await?;
        parse_response(resp).await
    }

    // ── Tables ────────────────────────────────────────────────────────────

    pub async fn list_tables(&self) -> Result<TableListResponse> {
        let resp = self.client.get(self.url("/tables")).send().await?;
        parse_response(resp).await
    }

    pub async fn table_detail(&self, name: &str) -> Result<TableDetailResponse> {
        let resp = self
            .client
            .get(self.url(&format!("/tables/{}", urlencoding::encode(name))))
            .send()
            .await?;
        parse_response(resp).await
    }
}

/// Parse an HTTP response: return the deserialized body on 2xx,
/// or an error containing the status and body text.
async fn parse_response<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!("{status}: {body}");
    }
    Ok(resp.json().await?)
}
