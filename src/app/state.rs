use std::sync::Arc;
use std::time::Instant;

use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use crate::api::DirectoryApi;
use crate::app::{App, InputMode};
use crate::error::to_human_message;
use crate::events::ActionEvent;
use crate::files::{FileManagerView, ListingBody};
use crate::helpers::{join_path, parent_path};
use crate::models::ServerIdentity;
use crate::permissions::Permissions;

impl App {
    pub fn new(
        server: ServerIdentity,
        permissions: Permissions,
        api: Arc<dyn DirectoryApi>,
        fragment: &str,
    ) -> Self {
        let view = FileManagerView::new(server, permissions, Arc::clone(&api), fragment);
        let directory_rx = view.directory_store().subscribe();
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        tracing::info!(
            "Opening {} ({}) at {}",
            view.server().name,
            view.server().id,
            view.directory()
        );

        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            view,
            api,
            selected: 0,
            list_state: ListState::default(),
            input: String::new(),
            status_message: None,
            help_scroll_position: 0,
            directory_rx,
            action_tx,
            action_rx,
            started_at: Instant::now(),
        }
    }

    /// One iteration of the UI loop before drawing.
    pub fn tick(&mut self) {
        self.process_action_events();
        self.view.process_events();
        self.view.load();
        self.clamp_selection();
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    fn clamp_selection(&mut self) {
        let count = self.view.row_count();
        if count == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(count - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn select_next(&mut self) {
        let count = self.view.row_count();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
        self.list_state.select(Some(self.selected));
    }

    pub fn select_previous(&mut self) {
        let count = self.view.row_count();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + count - 1) % count;
        self.list_state.select(Some(self.selected));
    }

    fn navigate(&mut self, fragment: &str) {
        self.view.navigate(fragment);
        self.selected = 0;
        self.list_state.select(None);
        self.view.load();
    }

    /// Enter the selected directory. Files are left alone.
    pub fn open_selected(&mut self) {
        let target = match self.view.row(self.selected) {
            Some(file) if file.is_directory() => join_path(self.view.directory(), &file.name),
            Some(file) => {
                tracing::debug!("{} is a file, nothing to open", file.name);
                return;
            }
            None => return,
        };
        self.navigate(&target);
    }

    pub fn go_back(&mut self) {
        let parent = parent_path(self.view.directory());
        if parent != self.view.directory() {
            self.navigate(&parent);
        }
    }

    /// Retry a failed listing, or refresh a loaded one.
    pub fn reload(&mut self) {
        let failed = matches!(self.view.view_model().body, ListingBody::Failed { .. });
        if self.view.retry() && !failed {
            self.set_status_message("Refreshing directory...");
        }
    }

    pub fn start_create(&mut self, mode: InputMode) {
        if !self.view.can_create() {
            tracing::warn!("Create requested without file.create permission");
            return;
        }
        self.input.clear();
        self.input_mode = mode;
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Submit the new folder / new file prompt.
    pub fn submit_input(&mut self) {
        let mode = self.input_mode;
        let name = self.input.trim().trim_matches('/').to_string();
        self.cancel_input();

        if name.is_empty() {
            return;
        }
        if !self.view.can_create() {
            return;
        }

        let key = self.view.key();
        let root = self.view.directory().to_string();
        let api = Arc::clone(&self.api);
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let path = join_path(&root, &name);
            let result = match mode {
                InputMode::NewDirectory => api.create_folder(&key.server_uuid, &root, &name).await,
                InputMode::NewFile => api.create_file(&key.server_uuid, &path).await,
                _ => return,
            };
            let event = match result {
                Ok(()) => ActionEvent::Created { key, path },
                Err(e) => {
                    tracing::error!("Failed to create {}: {}", path, e);
                    ActionEvent::Failed(to_human_message(&e))
                }
            };
            let _ = tx.send(event);
        });
    }

    pub fn process_action_events(&mut self) {
        while let Ok(event) = self.action_rx.try_recv() {
            match event {
                ActionEvent::Created { key, path } => {
                    self.set_status_message(format!("Created {}", path));
                    self.view.invalidate(&key);
                }
                ActionEvent::Failed(message) => {
                    self.set_status_message(format!("Error: {}", message));
                }
            }
        }
    }

    /// Current directory as seen by subscribers of the shared store.
    pub fn shared_directory(&mut self) -> String {
        self.directory_rx.borrow_and_update().clone()
    }
}
