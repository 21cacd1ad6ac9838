use std::sync::Arc;
use std::time::Instant;

use ratatui::widgets::ListState;
use tokio::sync::{mpsc, watch};

use crate::api::DirectoryApi;
use crate::events::ActionEvent;
use crate::files::FileManagerView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    NewDirectory,
    NewFile,
    Help,
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,

    pub view: FileManagerView,
    pub api: Arc<dyn DirectoryApi>,

    pub selected: usize,
    pub list_state: ListState,

    /// Text typed into the new folder / new file prompt
    pub input: String,
    pub status_message: Option<(String, Instant)>,
    pub help_scroll_position: u16,

    /// Mirrors the shared current directory for the status bar
    pub directory_rx: watch::Receiver<String>,

    pub action_tx: mpsc::UnboundedSender<ActionEvent>,
    pub action_rx: mpsc::UnboundedReceiver<ActionEvent>,

    pub started_at: Instant,
}
