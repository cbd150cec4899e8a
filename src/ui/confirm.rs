//! Confirmation dialog for destructive actions

use eframe::egui;

use crate::app::ShipDocsApp;

/// Modal asking the user to confirm the pending action
pub struct ConfirmDialog;

impl ConfirmDialog {
    /// Show the dialog while an action is pending
    pub fn show(ctx: &egui::Context, app: &mut ShipDocsApp) {
        let Some(action) = app.pending_action else {
            return;
        };

        let mut decision = None;
        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(action.prompt());
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        decision = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        decision = Some(false);
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            decision = Some(false);
        }

        if let Some(confirmed) = decision {
            app.resolve_pending(confirmed);
        }
    }
}
