//! Derived document totals
//!
//! Totals are recomputed from the line items on every frame and are never
//! persisted.

use super::model::LineItem;

/// Sums shown in the invoice and packing list summary blocks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DocumentTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    /// Gross weight in kg
    pub total_weight: f64,
    pub total_units: f64,
    /// Cubic meters
    pub total_volume: f64,
    /// Number of line items
    pub packages: usize,
}

impl DocumentTotals {
    /// Compute all totals for `items` at `tax_rate` percent
    pub fn compute(items: &[LineItem], tax_rate: f64) -> Self {
        let subtotal: f64 = items.iter().map(LineItem::line_total).sum();
        let tax_amount = subtotal * tax_rate / 100.0;

        Self {
            subtotal,
            tax_amount,
            total_amount: subtotal + tax_amount,
            total_weight: items.iter().map(LineItem::line_weight).sum(),
            total_units: items.iter().map(|item| item.quantity).sum(),
            total_volume: items
                .iter()
                .map(|item| item.unit_volume() * item.quantity)
                .sum(),
            packages: items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(quantity: f64, unit_price: f64) -> LineItem {
        LineItem {
            quantity,
            unit_price,
            ..LineItem::new(0)
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_invoice_scenario() {
        let items = vec![priced(2.0, 10.0), priced(1.0, 5.0)];
        let totals = DocumentTotals::compute(&items, 7.0);
        assert!(close(totals.subtotal, 25.0));
        assert!(close(totals.tax_amount, 1.75));
        assert!(close(totals.total_amount, 26.75));
    }

    #[test]
    fn test_packing_scenario() {
        let items = vec![LineItem {
            quantity: 3.0,
            weight: 2.0,
            dim_l: 10.0,
            dim_w: 10.0,
            dim_h: 10.0,
            ..LineItem::new(0)
        }];
        let totals = DocumentTotals::compute(&items, 7.0);
        assert!(close(totals.total_weight, 6.0));
        assert!(close(totals.total_volume, 0.003));
        assert!(close(totals.total_units, 3.0));
        assert_eq!(totals.packages, 1);
    }

    #[test]
    fn test_subtotal_ignores_weight_and_dimensions() {
        let plain = vec![priced(4.0, 2.5), priced(1.0, 3.0)];
        let heavy: Vec<LineItem> = plain
            .iter()
            .cloned()
            .map(|item| LineItem {
                weight: 99.0,
                dim_l: 120.0,
                dim_w: 80.0,
                dim_h: 100.0,
                ..item
            })
            .collect();
        assert_eq!(
            DocumentTotals::compute(&plain, 0.0).subtotal,
            DocumentTotals::compute(&heavy, 0.0).subtotal
        );
    }

    #[test]
    fn test_volume_sums_per_item() {
        let items = vec![
            LineItem {
                quantity: 2.0,
                dim_l: 100.0,
                dim_w: 50.0,
                dim_h: 20.0,
                ..LineItem::new(1)
            },
            LineItem {
                quantity: 5.0,
                dim_l: 30.0,
                dim_w: 30.0,
                dim_h: 30.0,
                ..LineItem::new(2)
            },
        ];
        let totals = DocumentTotals::compute(&items, 0.0);
        // 2 × 0.1 m³ + 5 × 0.027 m³
        assert!(close(totals.total_volume, 0.335));
    }

    #[test]
    fn test_empty_collection() {
        let totals = DocumentTotals::compute(&[], 7.0);
        assert_eq!(totals, DocumentTotals::default());
    }
}
