//! Totals block and document footer

use eframe::egui;

use crate::app::ShipDocsApp;
use crate::core::totals::DocumentTotals;
use crate::core::view;

/// Totals for the active document mode, right aligned under the table
pub struct SummaryPanel;

impl SummaryPanel {
    pub fn show(ui: &mut egui::Ui, app: &ShipDocsApp) {
        let invoice = app.store.invoice();
        let totals = DocumentTotals::compute(app.store.items(), invoice.tax_rate);
        let rows = view::summary_rows(app.mode, &totals, invoice);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            egui::Grid::new("summary_grid")
                .num_columns(2)
                .min_col_width(120.0)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for row in rows {
                        if row.emphasized {
                            ui.label(egui::RichText::new(row.label).strong().size(18.0));
                            ui.label(egui::RichText::new(row.value).strong().size(18.0));
                        } else {
                            ui.label(row.label);
                            ui.label(row.value);
                        }
                        ui.end_row();
                    }
                });
        });
    }
}

/// Incoterms, container and trading conditions
pub struct DocumentFooter;

impl DocumentFooter {
    pub fn show(ui: &mut egui::Ui, app: &ShipDocsApp) {
        let logistics = app.store.logistics();
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Incoterms: {}        Container: {}",
                    logistics.incoterms, logistics.container_no
                ))
                .small()
                .weak(),
            );
            ui.label(egui::RichText::new(view::TRADING_TERMS).small().weak());
            ui.label(egui::RichText::new(view::SIGNATURE_NOTE).small().weak());
        });
    }
}
