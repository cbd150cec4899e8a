//! Toolbar with document tabs, save status and actions

use std::time::Instant;

use eframe::egui;

use crate::app::ShipDocsApp;
use crate::core::store::DestructiveAction;
use crate::core::view::DocumentMode;

const STATUS_COLOR: egui::Color32 = egui::Color32::from_rgb(52, 211, 153);

/// Toolbar panel
pub struct ToolbarPanel;

impl ToolbarPanel {
    /// Show the toolbar
    pub fn show(ui: &mut egui::Ui, app: &mut ShipDocsApp) {
        ui.horizontal(|ui| {
            ui.heading("Octaship");
            ui.label(egui::RichText::new("Invoice").weak());
            ui.separator();

            for mode in [DocumentMode::Invoice, DocumentMode::PackingList] {
                if ui.selectable_label(app.mode == mode, mode.tab_label()).clicked() {
                    app.mode = mode;
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Print").on_hover_text("Print (Ctrl+P)").clicked() {
                    app.print();
                }

                let toggle = if app.editing { "Preview" } else { "Edit" };
                if ui.button(toggle).on_hover_text("Ctrl+E").clicked() {
                    app.editing = !app.editing;
                }

                if ui.button("Clear Form").clicked() {
                    app.request(DestructiveAction::ClearForm);
                }
                if ui
                    .button("\u{21BA}")
                    .on_hover_text("Reset Data")
                    .clicked()
                {
                    app.request(DestructiveAction::ResetAll);
                }

                if let Some(status) = app.store.status().current(Instant::now()) {
                    ui.label(egui::RichText::new(status).small().color(STATUS_COLOR));
                }
            });
        });
    }
}
