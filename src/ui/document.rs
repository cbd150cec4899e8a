//! The document page: header, logistics, parties, items and totals

use eframe::egui;

use crate::app::ShipDocsApp;
use super::header::HeaderPanel;
use super::items::ItemsTable;
use super::parties::{LogisticsStrip, PartiesPanel};
use super::summary::{DocumentFooter, SummaryPanel};

/// Whole document as one scrolling page
pub struct DocumentPanel;

impl DocumentPanel {
    /// Show the document page
    pub fn show(ui: &mut egui::Ui, app: &mut ShipDocsApp) {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_max_width(1000.0);

                HeaderPanel::show(ui, app);
                ui.separator();

                LogisticsStrip::show(ui, app);
                ui.add_space(12.0);

                PartiesPanel::show(ui, app);
                ui.add_space(16.0);

                ItemsTable::show(ui, app);
                ui.add_space(16.0);

                SummaryPanel::show(ui, app);
                ui.add_space(24.0);
                ui.separator();

                DocumentFooter::show(ui, app);
            });
    }
}
