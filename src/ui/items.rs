//! Line-item table

use eframe::egui;
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::app::ShipDocsApp;
use crate::core::model::{ItemUpdate, LineItem};
use crate::core::view::{self, Column};

/// Line-item table for the active document mode
pub struct ItemsTable;

/// What the user did to one row this frame
enum RowEdit {
    Update(u64, ItemUpdate),
    Delete(u64),
}

impl ItemsTable {
    pub fn show(ui: &mut egui::Ui, app: &mut ShipDocsApp) {
        let columns = view::visible_columns(app.mode, app.editing);
        let items = app.store.items().to_vec();
        let editing = app.editing;
        let mut edits = Vec::new();

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for column in &columns {
            table = table.column(match column {
                Column::Index => TableColumn::exact(28.0),
                Column::Description => TableColumn::remainder().at_least(180.0),
                Column::Dimensions if editing => TableColumn::auto().at_least(190.0),
                Column::Actions => TableColumn::exact(32.0),
                _ => TableColumn::auto().at_least(70.0),
            });
        }

        let row_height = if editing { 52.0 } else { 40.0 };
        table
            .header(24.0, |mut header| {
                for column in &columns {
                    header.col(|ui| {
                        ui.strong(column.header().to_uppercase());
                    });
                }
            })
            .body(|mut body| {
                for (index, item) in items.iter().enumerate() {
                    body.row(row_height, |mut row| {
                        for &column in &columns {
                            row.col(|ui| {
                                if editing {
                                    Self::edit_cell(ui, column, index, item, &mut edits);
                                } else {
                                    Self::show_cell(ui, column, index, item);
                                }
                            });
                        }
                    });
                }
            });

        if items.is_empty() {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(view::EMPTY_ITEMS_MESSAGE).weak());
            });
            ui.add_space(16.0);
        }

        if editing && ui.button("+ Add Item").clicked() {
            app.store.add_item();
        }

        for edit in edits {
            match edit {
                RowEdit::Update(id, update) => {
                    app.store.update_item(id, update);
                }
                RowEdit::Delete(id) => {
                    app.store.delete_item(id);
                }
            }
        }
    }

    fn show_cell(ui: &mut egui::Ui, column: Column, index: usize, item: &LineItem) {
        let text = view::cell_text(column, index, item);
        match column {
            Column::Description => {
                ui.vertical(|ui| {
                    ui.strong(text);
                    if !item.sku.is_empty() {
                        ui.label(egui::RichText::new(&item.sku).monospace().small().weak());
                    }
                });
            }
            Column::Index => {
                ui.label(egui::RichText::new(text).monospace().weak());
            }
            Column::LineTotal | Column::TotalWeight => {
                ui.strong(text);
            }
            _ => {
                ui.label(text);
            }
        }
    }

    fn edit_cell(
        ui: &mut egui::Ui,
        column: Column,
        index: usize,
        item: &LineItem,
        edits: &mut Vec<RowEdit>,
    ) {
        let id = item.id;
        match column {
            Column::Description => {
                ui.vertical(|ui| {
                    let mut description = item.description.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut description).hint_text("Description"))
                        .changed()
                    {
                        edits.push(RowEdit::Update(id, ItemUpdate::Description(description)));
                    }
                    let mut sku = item.sku.clone();
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut sku)
                                .hint_text("SKU")
                                .font(egui::TextStyle::Monospace),
                        )
                        .changed()
                    {
                        edits.push(RowEdit::Update(id, ItemUpdate::Sku(sku)));
                    }
                });
            }
            Column::Quantity => {
                ui.vertical(|ui| {
                    if let Some(v) = number_input(ui, item.quantity, 1.0) {
                        edits.push(RowEdit::Update(id, ItemUpdate::Quantity(v)));
                    }
                    let mut unit = item.unit.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut unit).hint_text("unit").desired_width(48.0))
                        .changed()
                    {
                        edits.push(RowEdit::Update(id, ItemUpdate::Unit(unit)));
                    }
                });
            }
            Column::UnitWeight => {
                if let Some(v) = number_input(ui, item.weight, 0.1) {
                    edits.push(RowEdit::Update(id, ItemUpdate::Weight(v)));
                }
            }
            Column::Dimensions => {
                ui.horizontal(|ui| {
                    if let Some(v) = number_input(ui, item.dim_l, 1.0) {
                        edits.push(RowEdit::Update(id, ItemUpdate::DimL(v)));
                    }
                    ui.label("x");
                    if let Some(v) = number_input(ui, item.dim_w, 1.0) {
                        edits.push(RowEdit::Update(id, ItemUpdate::DimW(v)));
                    }
                    ui.label("x");
                    if let Some(v) = number_input(ui, item.dim_h, 1.0) {
                        edits.push(RowEdit::Update(id, ItemUpdate::DimH(v)));
                    }
                });
            }
            Column::UnitPrice => {
                if let Some(v) = number_input(ui, item.unit_price, 0.01) {
                    edits.push(RowEdit::Update(id, ItemUpdate::UnitPrice(v)));
                }
            }
            Column::Actions => {
                if ui.button("\u{1F5D1}").on_hover_text("Delete item").clicked() {
                    edits.push(RowEdit::Delete(id));
                }
            }
            // Derived columns stay read-only while editing
            Column::Index | Column::TotalWeight | Column::LineTotal => {
                Self::show_cell(ui, column, index, item);
            }
        }
    }
}

/// Non-negative number field; returns the new value when it changed
fn number_input(ui: &mut egui::Ui, value: f64, speed: f64) -> Option<f64> {
    let mut edited = value;
    let response = ui.add(
        egui::DragValue::new(&mut edited)
            .speed(speed)
            .range(0.0..=f64::MAX)
            .max_decimals(3),
    );
    (response.changed() && edited != value).then_some(edited)
}
