use std::collections::HashMap;

use futures::future::join_all;

use datadesk_api::{
    ChatCollection, ChatListResponse, ChatPlatform, DocumentCollection, TableDetailResponse,
    TableSummary,
};
use datadesk_api_client::{ApiClient, FilePayload};

use crate::app::TableRecord;
use crate::config::PanelConfig;

/// Commands that require async I/O (network calls).
#[derive(Debug)]
pub enum AsyncCommand {
    // ── Fetch ─────────────────────────────────────────────────────────
    FetchDocuments,
    FetchChats,
    FetchTables,

    // ── Mutations ─────────────────────────────────────────────────────
    UploadDocuments {
        files: Vec<FilePayload>,
    },
    UploadChat {
        file: FilePayload,
        platform: ChatPlatform,
    },
    DeleteDocument {
        collection_id: String,
    },
    DeleteChat {
        collection_id: String,
    },
}

/// Results returned by async commands.
pub enum CommandResult {
    Documents(Result<Vec<DocumentCollection>, String>),
    Chats(Result<Vec<ChatCollection>, String>),
    Tables(Result<Vec<TableRecord>, String>),

    /// Ok carries the server-reported accepted file count.
    DocumentsUploaded(Result<u64, String>),
    /// Ok carries the server-reported parsed message count.
    ChatUploaded(Result<u64, String>),

    DocumentDeleted(Result<String, String>), // Ok(collection_id) or Err(msg)
    ChatDeleted(Result<String, String>),
}

fn make_client(config: &PanelConfig) -> Result<ApiClient, String> {
    ApiClient::new(&config.server_url).map_err(|e| format!("Failed to create HTTP client: {e}"))
}

pub async fn execute(cmd: AsyncCommand, config: &PanelConfig) -> CommandResult {
    match cmd {
        // ── Fetch ─────────────────────────────────────────────────────
        AsyncCommand::FetchDocuments => {
            let result = async {
                let client = make_client(config)?;
                client.list_documents().await.map_err(|e| format!("{e}"))
            }
            .await;
            CommandResult::Documents(result)
        }

        AsyncCommand::FetchChats => {
            let result = async {
                let client = make_client(config)?;
                client
                    .list_chats()
                    .await
                    .map(ChatListResponse::into_collections)
                    .map_err(|e| format!("{e}"))
            }
            .await;
            CommandResult::Chats(result)
        }

        AsyncCommand::FetchTables => {
            let result = async {
                let client = make_client(config)?;
                fetch_tables(&client).await
            }
            .await;
            CommandResult::Tables(result)
        }

        // ── Mutations ─────────────────────────────────────────────────
        AsyncCommand::UploadDocuments { files } => {
            let result = async {
                let client = make_client(config)?;
                client
                    .upload_documents(files)
                    .await
                    .map(|resp| resp.file_count)
                    .map_err(|e| format!("{e}"))
            }
            .await;
            CommandResult::DocumentsUploaded(result)
        }

        AsyncCommand::UploadChat { file, platform } => {
            let result = async {
                let client = make_client(config)?;
                client
                    .upload_chat(file, platform)
                    .await
                    .map(|resp| resp.message_count)
                    .map_err(|e| format!("{e}"))
            }
            .await;
            CommandResult::ChatUploaded(result)
        }

        AsyncCommand::DeleteDocument { collection_id } => {
            let result = async {
                let client = make_client(config)?;
                client
                    .delete_document(&collection_id)
                    .await
                    .map(|_| collection_id)
                    .map_err(|e| format!("{e}"))
            }
            .await;
            CommandResult::DocumentDeleted(result)
        }

        AsyncCommand::DeleteChat { collection_id } => {
            let result = async {
                let client = make_client(config)?;
                client
                    .delete_chat(&collection_id)
                    .await
                    .map(|_| collection_id)
                    .map_err(|e| format!("{e}"))
            }
            .await;
            CommandResult::ChatDeleted(result)
        }
    }
}

/// List tables, then fan out one detail fetch per table and join the whole
/// batch before producing a single store update.
async fn fetch_tables(client: &ApiClient) -> Result<Vec<TableRecord>, String> {
    let listing = client.list_tables().await.map_err(|e| format!("{e}"))?;
    if listing.tables.is_empty() {
        return Ok(Vec::new());
    }
    let details = join_all(listing.tables.iter().map(|table| {
        let name = table.name.clone();
        async move {
            let detail = client.table_detail(&name).await.map_err(|e| format!("{e}"));
            (name, detail)
        }
    }))
    .await;
    Ok(merge_table_details(listing.tables, details))
}

/// Merge per-table detail results onto the base records, preserving listing
/// order. A failed detail leaves that table without columns or sample rows;
/// it never fails the batch.
pub(crate) fn merge_table_details(
    tables: Vec<TableSummary>,
    details: Vec<(String, Result<TableDetailResponse, String>)>,
) -> Vec<TableRecord> {
    let mut by_name: HashMap<String, TableDetailResponse> = HashMap::new();
    for (name, detail) in details {
        match detail {
            Ok(detail) => {
                by_name.insert(name, detail);
            }
            Err(e) => tracing::warn!("failed to fetch detail for table {name}: {e}"),
        }
    }
    tables
        .into_iter()
        .map(|summary| {
            let detail = by_name.remove(&summary.name).unwrap_or_default();
            TableRecord {
                name: summary.name,
                row_count: summary.row_count,
                columns: detail.columns,
                sample_data: detail.sample_data,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use datadesk_api::ColumnDescriptor;
    use serde_json::json;

    fn summary(name: &str) -> TableSummary {
        TableSummary {
            name: name.to_string(),
            row_count: Some(10),
        }
    }

    fn detail(column: &str) -> TableDetailResponse {
        TableDetailResponse {
            columns: vec![ColumnDescriptor {
                name: column.to_string(),
                data_type: "TEXT".to_string(),
                nullable: true,
                primary_key: false,
            }],
            sample_data: vec![json!({ column: "value" })],
        }
    }

    #[test]
    fn failed_detail_degrades_only_that_table() {
        let tables = vec![
            summary("users"),
            summary("orders"),
            summary("items"),
            summary("events"),
            summary("logs"),
        ];
        let details = tables
            .iter()
            .map(|t| {
                if t.name == "orders" {
                    (t.name.clone(), Err("connection reset".to_string()))
                } else {
                    (t.name.clone(), Ok(detail("id")))
                }
            })
            .collect();

        let merged = merge_table_details(tables, details);
        assert_eq!(merged.len(), 5);
        let orders = merged.iter().find(|t| t.name == "orders").unwrap();
        assert!(orders.columns.is_empty());
        assert!(orders.sample_data.is_empty());
        assert_eq!(orders.row_count, Some(10));
        for table in merged.iter().filter(|t| t.name != "orders") {
            assert_eq!(table.columns.len(), 1);
        }
    }

    #[test]
    fn merge_preserves_listing_order() {
        let tables = vec![summary("b"), summary("a")];
        let details = vec![
            ("a".to_string(), Ok(detail("x"))),
            ("b".to_string(), Ok(detail("y"))),
        ];
        let merged = merge_table_details(tables, details);
        assert_eq!(merged[0].name, "b");
        assert_eq!(merged[1].name, "a");
        assert_eq!(merged[0].columns[0].name, "y");
        assert_eq!(merged[1].columns[0].name, "x");
    }
}
