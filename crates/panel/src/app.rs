use std::collections::HashSet;

use datadesk_api::{ChatCollection, ChatPlatform, ColumnDescriptor, DocumentCollection};
use datadesk_api_client::FilePayload;

use crate::async_ops::{execute, AsyncCommand, CommandResult};
use crate::config::PanelConfig;

/// Flash message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
    Info,
}

/// Top-level tab navigation: one tab per resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Documents,
    Chats,
    Tables,
}

/// A database table as held by the panel: the base listing record merged
/// with its column and sample-row detail. `columns` and `sample_data` stay
/// empty when the detail fetch for this table failed.
#[derive(Debug, Clone, Default)]
pub struct TableRecord {
    pub name: String,
    pub row_count: Option<u64>,
    pub columns: Vec<ColumnDescriptor>,
    pub sample_data: Vec<serde_json::Value>,
}

/// Panel state: the three per-kind stores plus transient UI flags.
///
/// Everything is owned by the panel instance — no ambient globals — so
/// multiple panels can coexist without interference. Stores are replaced
/// wholesale on each successful fetch and reset to empty on failure.
pub struct Panel {
    pub config: PanelConfig,

    // ── Tab navigation ───────────────────────────────────────────
    pub active_tab: Tab,
    pub pending_command: Option<AsyncCommand>,

    // ── Documents ────────────────────────────────────────────────
    pub documents: Vec<DocumentCollection>,
    pub documents_loading: bool,

    // ── Chats ────────────────────────────────────────────────────
    pub chats: Vec<ChatCollection>,
    pub chats_loading: bool,

    // ── Tables ───────────────────────────────────────────────────
    pub tables: Vec<TableRecord>,
    pub tables_loading: bool,
    /// Table names currently shown with their column detail visible.
    pub expanded: HashSet<String>,

    // ── Mutations ────────────────────────────────────────────────
    /// One upload (documents or chat) is in flight from the user's
    /// perspective at a time.
    pub uploading: bool,

    /// Transient message shown after fetch/upload/delete outcomes.
    pub flash_message: Option<(String, FlashLevel)>,
}

impl Panel {
    /// Create a panel on the documents tab with its initial fetch queued.
    pub fn new(config: PanelConfig) -> Self {
        let mut panel = Self {
            config,
            active_tab: Tab::Documents,
            pending_command: None,
            documents: Vec::new(),
            documents_loading: false,
            chats: Vec::new(),
            chats_loading: false,
            tables: Vec::new(),
            tables_loading: false,
            expanded: HashSet::new(),
            uploading: false,
            flash_message: None,
        };
        panel.reload_documents();
        panel
    }

    // ── Tab navigation ───────────────────────────────────────────────

    /// Activate a tab and queue a fetch for its kind.
    ///
    /// No same-tab guard: every activation re-fetches.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        match tab {
            Tab::Documents => self.reload_documents(),
            Tab::Chats => self.reload_chats(),
            Tab::Tables => self.reload_tables(),
        }
    }

    fn reload_documents(&mut self) {
        self.documents_loading = true;
        self.pending_command = Some(AsyncCommand::FetchDocuments);
    }

    fn reload_chats(&mut self) {
        self.chats_loading = true;
        self.pending_command = Some(AsyncCommand::FetchChats);
    }

    fn reload_tables(&mut self) {
        self.tables_loading = true;
        self.pending_command = Some(AsyncCommand::FetchTables);
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Queue a multi-file document upload. No-op for an empty selection.
    pub fn queue_upload_documents(&mut self, files: Vec<FilePayload>) {
        if files.is_empty() {
            return;
        }
        self.uploading = true;
        self.pending_command = Some(AsyncCommand::UploadDocuments { files });
    }

    /// Queue a single chat transcript upload with its platform tag.
    pub fn queue_upload_chat(&mut self, file: FilePayload, platform: ChatPlatform) {
        self.uploading = true;
        self.pending_command = Some(AsyncCommand::UploadChat { file, platform });
    }

    pub fn queue_delete_document(&mut self, collection_id: impl Into<String>) {
        self.pending_command = Some(AsyncCommand::DeleteDocument {
            collection_id: collection_id.into(),
        });
    }

    pub fn queue_delete_chat(&mut self, collection_id: impl Into<String>) {
        self.pending_command = Some(AsyncCommand::DeleteChat {
            collection_id: collection_id.into(),
        });
    }

    // ── Expansion ────────────────────────────────────────────────────

    /// Toggle column-detail visibility for one table. Purely local.
    pub fn toggle_expanded(&mut self, table: &str) {
        if !self.expanded.remove(table) {
            self.expanded.insert(table.to_string());
        }
    }

    pub fn is_expanded(&self, table: &str) -> bool {
        self.expanded.contains(table)
    }

    // ── Command dispatch ─────────────────────────────────────────────

    /// Take the queued command for the host to dispatch.
    pub fn take_pending_command(&mut self) -> Option<AsyncCommand> {
        self.pending_command.take()
    }

    /// Execute the queued command, if any, and apply its result.
    ///
    /// Convenience for hosts without their own dispatch loop. Hosts that
    /// allow overlapping requests should drain [`Self::take_pending_command`]
    /// and dispatch themselves; overlapping results are applied in arrival
    /// order and the last one wins.
    pub async fn tick(&mut self) {
        if let Some(cmd) = self.pending_command.take() {
            let result = execute(cmd, &self.config).await;
            self.apply_command_result(result);
        }
    }

    // ── Apply async command result ───────────────────────────────────

    pub fn apply_command_result(&mut self, result: CommandResult) {
        match result {
            CommandResult::Documents(Ok(documents)) => {
                self.documents = documents;
                self.documents_loading = false;
            }
            CommandResult::Documents(Err(e)) => {
                tracing::error!("document list fetch failed: {e}");
                self.documents = Vec::new();
                self.documents_loading = false;
                self.flash_error("Failed to fetch documents");
            }

            CommandResult::Chats(Ok(chats)) => {
                self.chats = chats;
                self.chats_loading = false;
            }
            CommandResult::Chats(Err(e)) => {
                tracing::error!("chat list fetch failed: {e}");
                self.chats = Vec::new();
                self.chats_loading = false;
                self.flash_error("Failed to fetch chats");
            }

            CommandResult::Tables(Ok(tables)) => {
                self.tables = tables;
                self.tables_loading = false;
            }
            CommandResult::Tables(Err(e)) => {
                // Logged only — table fetch failures are not surfaced.
                tracing::error!("table list fetch failed: {e}");
                self.tables = Vec::new();
                self.tables_loading = false;
            }

            CommandResult::DocumentsUploaded(Ok(file_count)) => {
                self.uploading = false;
                self.flash_success(format!("Uploaded {file_count} file(s)"));
                self.reload_documents();
            }
            CommandResult::DocumentsUploaded(Err(e)) => {
                self.uploading = false;
                self.flash_error(format!("Upload failed: {e}"));
            }

            CommandResult::ChatUploaded(Ok(message_count)) => {
                self.uploading = false;
                self.flash_success(format!("Imported chat ({message_count} messages)"));
                self.reload_chats();
            }
            CommandResult::ChatUploaded(Err(e)) => {
                self.uploading = false;
                self.flash_error(format!("Chat upload failed: {e}"));
            }

            CommandResult::DocumentDeleted(Ok(_)) => {
                self.flash_success("Collection deleted");
                self.reload_documents();
            }
            CommandResult::DocumentDeleted(Err(e)) => {
                self.flash_error(format!("Delete failed: {e}"));
            }

            CommandResult::ChatDeleted(Ok(_)) => {
                self.flash_success("Chat deleted");
                self.reload_chats();
            }
            CommandResult::ChatDeleted(Err(e)) => {
                self.flash_error(format!("Delete failed: {e}"));
            }
        }
    }

    // ── Flash messages ───────────────────────────────────────────────

    pub fn flash_success(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), FlashLevel::Success));
    }

    pub fn flash_error(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), FlashLevel::Error));
    }

    pub fn flash_info(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), FlashLevel::Info));
    }

    /// Dismiss the current flash message.
    pub fn clear_flash(&mut self) {
        self.flash_message = None;
    }
}
