//! State and data controller for the datadesk workspace panel.
//!
//! The panel manages three independent resource collections — document
//! collections, imported chat transcripts, and database tables exposed by
//! the backend — behind one tabbed interface. This crate owns the state
//! machine only: which kind to fetch when, how uploads and deletes trigger
//! re-synchronization, and the transient flags (loading, uploading,
//! expansion) the view renders from. Rendering lives in the hosting
//! frontend.
//!
//! State mutators queue an [`AsyncCommand`] instead of performing I/O
//! themselves. The hosting view drains [`Panel::take_pending_command`],
//! awaits [`execute`], and feeds the [`CommandResult`] back through
//! [`Panel::apply_command_result`]. Hosts that don't need overlapping
//! requests can call [`Panel::tick`] instead.

pub mod app;
pub mod async_ops;
pub mod config;
pub mod display;

pub use app::{FlashLevel, Panel, Tab, TableRecord};
pub use async_ops::{execute, AsyncCommand, CommandResult};
pub use config::PanelConfig;
pub use display::{collection_title, UNTITLED_COLLECTION};
