//! Document header: issuing company and invoice reference

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::app::ShipDocsApp;

/// Company block on the left, document title and reference on the right
pub struct HeaderPanel;

impl HeaderPanel {
    pub fn show(ui: &mut egui::Ui, app: &mut ShipDocsApp) {
        ui.columns(2, |columns| {
            Self::show_company(&mut columns[0], app);
            columns[1].with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                Self::show_reference(ui, app);
            });
        });
    }

    fn show_company(ui: &mut egui::Ui, app: &mut ShipDocsApp) {
        let mut company = app.store.company().clone();
        ui.heading(egui::RichText::new(company.name.to_uppercase()).strong());

        if !app.editing {
            ui.label(&company.address);
            ui.label(company.locality());
            ui.label(&company.country);
            ui.label(
                egui::RichText::new(format!(
                    "{}  {}  {}",
                    company.phone, company.email, company.website
                ))
                .weak(),
            );
            return;
        }

        egui::Grid::new("company_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Name", &mut company.name),
                    ("Address", &mut company.address),
                    ("City", &mut company.city),
                    ("State", &mut company.state),
                    ("Zip", &mut company.zip),
                    ("Country", &mut company.country),
                    ("Phone", &mut company.phone),
                    ("Email", &mut company.email),
                    ("Website", &mut company.website),
                ] {
                    ui.label(label);
                    ui.add(egui::TextEdit::singleline(value).hint_text(label));
                    ui.end_row();
                }
            });

        app.store.set_company(company);
    }

    fn show_reference(ui: &mut egui::Ui, app: &mut ShipDocsApp) {
        ui.label(
            egui::RichText::new(app.mode.title().to_uppercase())
                .size(26.0)
                .weak(),
        );
        ui.add_space(8.0);

        let mut invoice = app.store.invoice().clone();
        if !app.editing {
            ui.label(format!("Ref #: {}", invoice.number));
            ui.label(format!("Date: {}", invoice.date.format("%Y-%m-%d")));
            if app.mode.shows_due_date() {
                ui.label(format!("Due: {}", invoice.due_date.format("%Y-%m-%d")));
            }
            return;
        }

        egui::Grid::new("invoice_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Ref #:");
                ui.add(egui::TextEdit::singleline(&mut invoice.number).desired_width(140.0));
                ui.end_row();

                ui.label("Date:");
                ui.add(DatePickerButton::new(&mut invoice.date).id_salt("invoice_date"));
                ui.end_row();

                ui.label("Due:");
                ui.add(DatePickerButton::new(&mut invoice.due_date).id_salt("invoice_due_date"));
                ui.end_row();

                ui.label("Currency:");
                ui.add(egui::TextEdit::singleline(&mut invoice.currency).desired_width(60.0));
                ui.end_row();

                ui.label("Tax %:");
                ui.add(
                    egui::DragValue::new(&mut invoice.tax_rate)
                        .speed(0.1)
                        .range(0.0..=100.0),
                );
                ui.end_row();
            });

        app.store.set_invoice(invoice);
    }
}
