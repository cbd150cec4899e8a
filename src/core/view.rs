//! Which columns, cells and totals each document shows
//!
//! Everything here is a pure function of the document mode and whether the
//! document is being edited, so the on-screen table and the printed page
//! always agree.

use serde::Serialize;

use super::model::{InvoiceDetails, LineItem};
use super::totals::DocumentTotals;

/// Which of the two documents is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentMode {
    #[default]
    Invoice,
    PackingList,
}

impl DocumentMode {
    pub fn title(self) -> &'static str {
        match self {
            DocumentMode::Invoice => "Commercial Invoice",
            DocumentMode::PackingList => "Packing List",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            DocumentMode::Invoice => "Invoice",
            DocumentMode::PackingList => "Packing List",
        }
    }

    /// Packing lists carry no payment terms
    pub fn shows_due_date(self) -> bool {
        self == DocumentMode::Invoice
    }
}

/// A line-item table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Index,
    Description,
    Quantity,
    UnitWeight,
    Dimensions,
    TotalWeight,
    UnitPrice,
    LineTotal,
    /// Row actions (delete), only while editing
    Actions,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Index => "#",
            Column::Description => "Description",
            Column::Quantity => "Qty",
            Column::UnitWeight => "Unit Kg",
            Column::Dimensions => "Dims (cm)",
            Column::TotalWeight => "Total Kg",
            Column::UnitPrice => "Price",
            Column::LineTotal => "Total",
            Column::Actions => "",
        }
    }

    /// Numeric columns are right aligned
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Column::UnitWeight
                | Column::Dimensions
                | Column::TotalWeight
                | Column::UnitPrice
                | Column::LineTotal
        )
    }
}

/// Visible columns, in order
pub fn visible_columns(mode: DocumentMode, editing: bool) -> Vec<Column> {
    let mut columns = vec![Column::Index, Column::Description, Column::Quantity];
    match mode {
        DocumentMode::PackingList => {
            columns.extend([Column::UnitWeight, Column::Dimensions, Column::TotalWeight])
        }
        DocumentMode::Invoice => columns.extend([Column::UnitPrice, Column::LineTotal]),
    }
    if editing {
        columns.push(Column::Actions);
    }
    columns
}

/// Number of visible columns: 6/7 while editing, 5/6 read-only
#[cfg(test)]
pub fn column_count(mode: DocumentMode, editing: bool) -> usize {
    visible_columns(mode, editing).len()
}

/// Shown across the whole table when there are no items
pub const EMPTY_ITEMS_MESSAGE: &str =
    "No items yet \u{2014} use Add Item to create your first line.";

/// Footer note printed under every document
pub const TRADING_TERMS: &str = "Thank you for choosing Octaship Logistics. All business undertaken subject to our Standard Trading Conditions.";
pub const SIGNATURE_NOTE: &str = "No Signature Required unless specified.";

pub fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a number without a trailing ".0" for whole values
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Read-only text of one cell. `index` is the zero-based row position.
pub fn cell_text(column: Column, index: usize, item: &LineItem) -> String {
    match column {
        Column::Index => (index + 1).to_string(),
        Column::Description => item.description.clone(),
        Column::Quantity => plain_number(item.quantity),
        Column::UnitWeight => plain_number(item.weight),
        Column::Dimensions => format!(
            "{}x{}x{}",
            plain_number(item.dim_l),
            plain_number(item.dim_w),
            plain_number(item.dim_h)
        ),
        Column::TotalWeight => format!("{:.2}", item.line_weight()),
        Column::UnitPrice => money(item.unit_price),
        Column::LineTotal => money(item.line_total()),
        Column::Actions => String::new(),
    }
}

/// One label/value line of the summary block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
    /// The final, emphasized line
    pub emphasized: bool,
}

impl SummaryRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            emphasized: false,
        }
    }

    fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }
}

/// Summary block under the table
pub fn summary_rows(
    mode: DocumentMode,
    totals: &DocumentTotals,
    invoice: &InvoiceDetails,
) -> Vec<SummaryRow> {
    match mode {
        DocumentMode::Invoice => vec![
            SummaryRow::new("Subtotal", money(totals.subtotal)),
            SummaryRow::new(
                format!("Tax ({}%)", plain_number(invoice.tax_rate)),
                money(totals.tax_amount),
            ),
            SummaryRow::new("Total", money(totals.total_amount)).emphasized(),
        ],
        DocumentMode::PackingList => vec![
            SummaryRow::new("Total Pkgs:", totals.packages.to_string()),
            SummaryRow::new("Total Units:", plain_number(totals.total_units)),
            SummaryRow::new("Volume:", format!("{:.3} m\u{b3}", totals.total_volume)),
            SummaryRow::new("Gross Wgt:", format!("{:.2} kg", totals.total_weight)).emphasized(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn invoice() -> InvoiceDetails {
        InvoiceDetails::issued_on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_column_counts() {
        assert_eq!(column_count(DocumentMode::Invoice, true), 6);
        assert_eq!(column_count(DocumentMode::PackingList, true), 7);
        assert_eq!(column_count(DocumentMode::Invoice, false), 5);
        assert_eq!(column_count(DocumentMode::PackingList, false), 6);
    }

    #[test]
    fn test_due_date_only_on_invoice() {
        assert!(DocumentMode::Invoice.shows_due_date());
        assert!(!DocumentMode::PackingList.shows_due_date());
    }

    #[test]
    fn test_toggling_edit_drops_actions_column() {
        let editing = visible_columns(DocumentMode::PackingList, true);
        let reading = visible_columns(DocumentMode::PackingList, false);
        assert_eq!(editing.len(), 7);
        assert_eq!(reading.len(), 6);
        assert_eq!(editing.last(), Some(&Column::Actions));
        assert!(!reading.contains(&Column::Actions));
        assert_eq!(&editing[..6], reading.as_slice());
    }

    #[test]
    fn test_mode_specific_columns() {
        let invoice_cols = visible_columns(DocumentMode::Invoice, false);
        assert!(invoice_cols.contains(&Column::UnitPrice));
        assert!(!invoice_cols.contains(&Column::Dimensions));

        let packing_cols = visible_columns(DocumentMode::PackingList, false);
        assert!(packing_cols.contains(&Column::TotalWeight));
        assert!(!packing_cols.contains(&Column::LineTotal));
    }

    #[test]
    fn test_cell_text() {
        let item = LineItem {
            quantity: 3.0,
            unit_price: 4.5,
            weight: 1.25,
            dim_l: 40.0,
            dim_w: 30.0,
            dim_h: 20.5,
            ..LineItem::new(9)
        };
        assert_eq!(cell_text(Column::Index, 0, &item), "1");
        assert_eq!(cell_text(Column::Quantity, 0, &item), "3");
        assert_eq!(cell_text(Column::Dimensions, 0, &item), "40x30x20.5");
        assert_eq!(cell_text(Column::TotalWeight, 0, &item), "3.75");
        assert_eq!(cell_text(Column::UnitPrice, 0, &item), "$4.50");
        assert_eq!(cell_text(Column::LineTotal, 0, &item), "$13.50");
    }

    #[test]
    fn test_invoice_summary() {
        let items = vec![
            LineItem {
                quantity: 2.0,
                unit_price: 10.0,
                ..LineItem::new(1)
            },
            LineItem {
                quantity: 1.0,
                unit_price: 5.0,
                ..LineItem::new(2)
            },
        ];
        let totals = DocumentTotals::compute(&items, 7.0);
        let rows = summary_rows(DocumentMode::Invoice, &totals, &invoice());
        let values: Vec<_> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["$25.00", "$1.75", "$26.75"]);
        assert_eq!(rows[1].label, "Tax (7%)");
        assert!(rows[2].emphasized);
    }

    #[test]
    fn test_packing_summary() {
        let items = vec![LineItem {
            quantity: 3.0,
            weight: 2.0,
            dim_l: 10.0,
            dim_w: 10.0,
            dim_h: 10.0,
            ..LineItem::new(1)
        }];
        let totals = DocumentTotals::compute(&items, 7.0);
        let rows = summary_rows(DocumentMode::PackingList, &totals, &invoice());
        let values: Vec<_> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["1", "3", "0.003 m\u{b3}", "6.00 kg"]);
    }
}
