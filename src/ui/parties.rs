//! Logistics strip and bill-to / ship-to blocks

use eframe::egui;

use crate::app::ShipDocsApp;
use crate::core::model::{LogisticsField, PartyAddress};

/// Shipment metadata, one labelled field per column
pub struct LogisticsStrip;

impl LogisticsStrip {
    pub fn show(ui: &mut egui::Ui, app: &mut ShipDocsApp) {
        let mut logistics = app.store.logistics().clone();

        egui::Grid::new("logistics_grid")
            .num_columns(LogisticsField::ALL.len())
            .spacing([16.0, 2.0])
            .show(ui, |ui| {
                for field in LogisticsField::ALL {
                    ui.label(egui::RichText::new(field.label().to_uppercase()).small().weak());
                }
                ui.end_row();

                for field in LogisticsField::ALL {
                    if app.editing {
                        ui.add(
                            egui::TextEdit::singleline(logistics.get_mut(field))
                                .desired_width(110.0),
                        );
                    } else {
                        ui.label(egui::RichText::new(logistics.get(field)).strong());
                    }
                }
                ui.end_row();
            });

        app.store.set_logistics(logistics);
    }
}

/// Bill-to and ship-to side by side
pub struct PartiesPanel;

impl PartiesPanel {
    pub fn show(ui: &mut egui::Ui, app: &mut ShipDocsApp) {
        let mut bill_to = app.store.bill_to().clone();
        let mut ship_to = app.store.ship_to().clone();
        let editing = app.editing;

        ui.columns(2, |columns| {
            Self::show_party(&mut columns[0], "Bill To", &mut bill_to, editing);
            Self::show_party(&mut columns[1], "Ship To", &mut ship_to, editing);
        });

        app.store.set_bill_to(bill_to);
        app.store.set_ship_to(ship_to);
    }

    fn show_party(ui: &mut egui::Ui, heading: &str, party: &mut PartyAddress, editing: bool) {
        ui.label(egui::RichText::new(heading.to_uppercase()).small().strong().weak());
        ui.separator();

        if !editing {
            ui.label(egui::RichText::new(&party.name).strong().size(16.0));
            ui.label(&party.address);
            ui.label(party.locality());
            ui.label(&party.country);
            if !party.contact.is_empty() {
                ui.label(format!("Attn: {}", party.contact));
            }
            return;
        }

        let width = ui.available_width();
        ui.add(
            egui::TextEdit::singleline(&mut party.name)
                .hint_text("Company Name")
                .desired_width(width),
        );
        ui.add(
            egui::TextEdit::multiline(&mut party.address)
                .hint_text("Address")
                .desired_rows(3)
                .desired_width(width),
        );
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut party.city).hint_text("City").desired_width(width * 0.45));
            ui.add(egui::TextEdit::singleline(&mut party.state).hint_text("State").desired_width(width * 0.2));
            ui.add(egui::TextEdit::singleline(&mut party.zip).hint_text("Zip").desired_width(width * 0.25));
        });
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut party.country).hint_text("Country").desired_width(width * 0.45));
            ui.add(egui::TextEdit::singleline(&mut party.contact).hint_text("Contact").desired_width(width * 0.5));
        });
    }
}
