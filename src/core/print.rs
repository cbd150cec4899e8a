//! Printable rendering of the current document
//!
//! The document is rendered read-only to a standalone HTML page and handed to
//! the host's default handler, which owns the actual print dialog.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Serialize;
use tera::{Context, Tera};

use super::model::{CompanyInfo, LogisticsField, PartyAddress};
use super::store::DocumentStore;
use super::totals::DocumentTotals;
use super::view::{self, Column, DocumentMode, SummaryRow};

const PRINT_TEMPLATE: &str = include_str!("../../templates/print.html.tera");

#[derive(Serialize)]
struct LabeledValue<'a> {
    label: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct PartyBlock<'a> {
    heading: &'a str,
    address: &'a PartyAddress,
    locality: String,
}

#[derive(Serialize)]
struct HeaderCell {
    header: &'static str,
    numeric: bool,
}

#[derive(Serialize)]
struct Cell {
    text: String,
    /// Printed under the description
    sku: String,
    numeric: bool,
}

#[derive(Serialize)]
struct Row {
    cells: Vec<Cell>,
}

#[derive(Serialize)]
struct PrintContext<'a> {
    title: &'static str,
    auto_print: bool,
    company: &'a CompanyInfo,
    company_locality: String,
    number: &'a str,
    date: String,
    due_date: String,
    show_due_date: bool,
    logistics: Vec<LabeledValue<'a>>,
    parties: Vec<PartyBlock<'a>>,
    columns: Vec<HeaderCell>,
    rows: Vec<Row>,
    empty_message: &'static str,
    summary: Vec<SummaryRow>,
    incoterms: &'a str,
    container_no: &'a str,
    trading_terms: &'static str,
    signature_note: &'static str,
}

/// Render the read-only page for `mode`.
///
/// With `auto_print` the page opens the print dialog as soon as it loads.
pub fn render_html(store: &DocumentStore, mode: DocumentMode, auto_print: bool) -> Result<String> {
    // Print is always the read-only variant: no actions column
    let columns = view::visible_columns(mode, false);
    let invoice = store.invoice();
    let logistics = store.logistics();
    let totals = DocumentTotals::compute(store.items(), invoice.tax_rate);

    let rows = store
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| Row {
            cells: columns
                .iter()
                .map(|&column| Cell {
                    text: view::cell_text(column, index, item),
                    sku: if column == Column::Description {
                        item.sku.clone()
                    } else {
                        String::new()
                    },
                    numeric: column.is_numeric(),
                })
                .collect(),
        })
        .collect();

    let context = PrintContext {
        title: mode.title(),
        auto_print,
        company: store.company(),
        company_locality: store.company().locality(),
        number: &invoice.number,
        date: invoice.date.format("%Y-%m-%d").to_string(),
        due_date: invoice.due_date.format("%Y-%m-%d").to_string(),
        show_due_date: mode.shows_due_date(),
        logistics: LogisticsField::ALL
            .iter()
            .map(|&field| LabeledValue {
                label: field.label(),
                value: logistics.get(field),
            })
            .collect(),
        parties: vec![
            PartyBlock {
                heading: "Bill To",
                address: store.bill_to(),
                locality: store.bill_to().locality(),
            },
            PartyBlock {
                heading: "Ship To",
                address: store.ship_to(),
                locality: store.ship_to().locality(),
            },
        ],
        columns: columns
            .iter()
            .map(|column| HeaderCell {
                header: column.header(),
                numeric: column.is_numeric(),
            })
            .collect(),
        rows,
        empty_message: view::EMPTY_ITEMS_MESSAGE,
        summary: view::summary_rows(mode, &totals, invoice),
        incoterms: &logistics.incoterms,
        container_no: &logistics.container_no,
        trading_terms: view::TRADING_TERMS,
        signature_note: view::SIGNATURE_NOTE,
    };

    let context = Context::from_serialize(&context).context("Failed to build print context")?;
    Tera::one_off(PRINT_TEMPLATE, &context, true).context("Failed to render print template")
}

/// File name for a rendered document, e.g. `packing-list-INV-2025-001.html`
pub fn file_name(store: &DocumentStore, mode: DocumentMode) -> String {
    let prefix = match mode {
        DocumentMode::Invoice => "invoice",
        DocumentMode::PackingList => "packing-list",
    };
    let reference: String = store
        .invoice()
        .number
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if reference.is_empty() {
        format!("{}.html", prefix)
    } else {
        format!("{}-{}.html", prefix, reference)
    }
}

/// Write the rendered page to `path`
pub fn write_html(store: &DocumentStore, mode: DocumentMode, path: &Path, auto_print: bool) -> Result<()> {
    let html = render_html(store, mode, auto_print)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Render into `dir` and ask the host to open (and print) the page
pub fn print_document(store: &DocumentStore, mode: DocumentMode, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(file_name(store, mode));
    write_html(store, mode, &path, true)?;
    open::that(&path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ItemUpdate, PartyAddress};
    use crate::core::storage::MemoryStorage;
    use std::time::Duration;

    fn store_with_item() -> DocumentStore {
        let mut store =
            DocumentStore::load(Box::new(MemoryStorage::new()), Duration::from_secs(2));
        let id = store.add_item();
        store.update_item(id, ItemUpdate::Description("Steel <drum>".to_string()));
        store.update_item(id, ItemUpdate::Sku("SKU-77".to_string()));
        store.update_item(id, ItemUpdate::Quantity(2.0));
        store.update_item(id, ItemUpdate::UnitPrice(10.0));
        store.update_item(id, ItemUpdate::Weight(4.0));
        store.set_bill_to(PartyAddress {
            name: "Buyer & Sons".to_string(),
            ..PartyAddress::default()
        });
        store
    }

    #[test]
    fn test_invoice_page_shows_price_columns() {
        let store = store_with_item();
        let html = render_html(&store, DocumentMode::Invoice, false).unwrap();
        assert!(html.contains("Commercial Invoice"));
        assert!(html.contains("$20.00"));
        assert!(html.contains(">Price<"));
        assert!(!html.contains("Unit Kg"));
        assert!(!html.contains("window.print()"));
        assert!(html.contains("<strong>Due:</strong>"));
    }

    #[test]
    fn test_packing_page_shows_weight_columns() {
        let store = store_with_item();
        let html = render_html(&store, DocumentMode::PackingList, true).unwrap();
        assert!(html.contains("Packing List"));
        assert!(html.contains("Unit Kg"));
        assert!(html.contains("8.00 kg"));
        assert!(!html.contains(">Price<"));
        assert!(html.contains("window.print()"));
        assert!(!html.contains("<strong>Due:</strong>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let store = store_with_item();
        let html = render_html(&store, DocumentMode::Invoice, false).unwrap();
        assert!(html.contains("Steel &lt;drum&gt;"));
        assert!(html.contains("Buyer &amp; Sons"));
        assert!(html.contains("SKU-77"));
    }

    #[test]
    fn test_empty_document_uses_placeholder() {
        let store = DocumentStore::load(Box::new(MemoryStorage::new()), Duration::from_secs(2));
        let html = render_html(&store, DocumentMode::Invoice, false).unwrap();
        assert!(html.contains("No items yet"));
        assert!(html.contains("colspan=\"5\""));
    }

    #[test]
    fn test_file_name_sanitizes_reference() {
        let store = DocumentStore::load(Box::new(MemoryStorage::new()), Duration::from_secs(2));
        assert_eq!(
            file_name(&store, DocumentMode::PackingList),
            "packing-list-INV-2025-001.html"
        );
    }

    #[test]
    fn test_write_html_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_item();
        let path = dir.path().join("out").join("doc.html");
        write_html(&store, DocumentMode::Invoice, &path, false).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
    }
}
