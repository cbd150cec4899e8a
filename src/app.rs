//! Main application state and UI coordination

use std::time::Instant;

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::print;
use crate::core::storage::{FileStorage, MemoryStorage, Storage, StorageError};
use crate::core::store::{DestructiveAction, DocumentStore};
use crate::core::view::DocumentMode;
use crate::ui::{confirm::ConfirmDialog, document::DocumentPanel, toolbar::ToolbarPanel};

/// Main application state
pub struct ShipDocsApp {
    /// Persisted document slices
    pub store: DocumentStore,
    /// Application configuration
    pub config: AppConfig,
    /// Invoice or packing list
    pub mode: DocumentMode,
    /// Editable inputs (true) or the read-only print layout (false)
    pub editing: bool,
    /// Destructive action awaiting confirmation
    pub pending_action: Option<DestructiveAction>,
}

impl ShipDocsApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {}", e);
            AppConfig::default()
        });
        Self::apply_theme(&cc.egui_ctx, config.dark_theme());

        let store = DocumentStore::load(Self::open_storage(&config), config.status_duration());

        Self {
            store,
            config,
            mode: DocumentMode::Invoice,
            editing: true,
            pending_action: None,
        }
    }

    /// File storage when a data directory is available, memory otherwise
    fn open_storage(config: &AppConfig) -> Box<dyn Storage> {
        let storage = config
            .storage_dir()
            .ok_or_else(|| StorageError::Unavailable("no data directory".to_string()))
            .and_then(|dir| FileStorage::open(dir));

        match storage {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!("{}; changes will not survive a restart", e);
                Box::new(MemoryStorage::new())
            }
        }
    }

    fn apply_theme(ctx: &egui::Context, dark: bool) {
        ctx.set_visuals(if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    /// Toggle the theme and remember it
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        let dark = !self.config.dark_theme();
        self.config.set_dark_theme(dark);
        Self::apply_theme(ctx, dark);
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    /// Ask for confirmation before running `action`
    pub fn request(&mut self, action: DestructiveAction) {
        self.pending_action = Some(action);
    }

    /// Run the pending action if the user confirmed, otherwise drop it
    pub fn resolve_pending(&mut self, confirmed: bool) {
        if let Some(action) = self.pending_action.take() {
            if confirmed {
                action.apply(&mut self.store);
            } else {
                tracing::debug!("{} cancelled", action.title());
            }
        }
    }

    /// Switch to the read-only layout and hand the document to the host printer
    pub fn print(&mut self) {
        self.editing = false;
        let message = match print::print_document(&self.store, self.mode, &self.config.print_dir()) {
            Ok(path) => {
                tracing::info!("Opened {} for printing", path.display());
                "Opened for printing"
            }
            Err(e) => {
                tracing::error!("Print failed: {:#}", e);
                "Print failed"
            }
        };
        self.store.status_mut().show(message, Instant::now());
    }

    /// Save the read-only page to a file of the user's choosing
    pub fn export_html(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Export Document")
            .set_file_name(print::file_name(&self.store, self.mode))
            .add_filter("HTML", &["html"])
            .save_file()
        else {
            return;
        };

        let message = match print::write_html(&self.store, self.mode, &path, false) {
            Ok(()) => "Exported",
            Err(e) => {
                tracing::error!("Export failed: {:#}", e);
                "Export failed"
            }
        };
        self.store.status_mut().show(message, Instant::now());
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Print...").clicked() {
                        self.print();
                        ui.close();
                    }
                    if ui.button("Export HTML...").clicked() {
                        self.export_html();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.add_enabled(self.editing, egui::Button::new("Add Item")).clicked() {
                        self.store.add_item();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Clear Form...").clicked() {
                        self.request(DestructiveAction::ClearForm);
                        ui.close();
                    }
                    if ui.button("Reset Data...").clicked() {
                        self.request(DestructiveAction::ResetAll);
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    for mode in [DocumentMode::Invoice, DocumentMode::PackingList] {
                        if ui.selectable_label(self.mode == mode, mode.tab_label()).clicked() {
                            self.mode = mode;
                            ui.close();
                        }
                    }
                    ui.separator();
                    if ui.checkbox(&mut self.editing, "Edit Mode").clicked() {
                        ui.close();
                    }
                    if ui.button("Toggle Dark Theme").clicked() {
                        self.toggle_theme(ctx);
                        ui.close();
                    }
                });
            });
        });
    }
}

impl eframe::App for ShipDocsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.store.status_mut().tick(now);
        if let Some(left) = self.store.status().remaining(now) {
            ctx.request_repaint_after(left);
        }

        // Handle keyboard shortcuts
        let (print, toggle_edit) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::P),
                i.modifiers.command && i.key_pressed(egui::Key::E),
            )
        });
        if print {
            self.print();
        }
        if toggle_edit {
            self.editing = !self.editing;
        }

        self.render_menu_bar(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ToolbarPanel::show(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("document_scroll")
                .show(ui, |ui| {
                    DocumentPanel::show(ui, self);
                });
        });

        ConfirmDialog::show(ctx, self);
    }
}
