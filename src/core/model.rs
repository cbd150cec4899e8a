//! Document slices shared by the invoice and the packing list
//!
//! Every slice is stored under its own key, so each type carries its own
//! defaults and decodes independently of the others. Field names follow the
//! camelCase layout the documents have always been stored in.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Days between the invoice date and the default due date
pub const DEFAULT_DUE_DAYS: u64 = 15;

/// Issuing company, printed in the document header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Octaship Logistics".to_string(),
            address: "5000 Hwy 7, Markham, ON L3R 4M9".to_string(),
            city: "Port Logistics City".to_string(),
            state: "ST".to_string(),
            zip: "90210".to_string(),
            country: "Canada".to_string(),
            phone: "+1(437 268-6660)".to_string(),
            email: "support@octaship.com".to_string(),
            website: "www.octaship.com".to_string(),
        }
    }
}

/// Invoice metadata: reference number, dates, currency and tax rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceDetails {
    /// Free-form reference number
    pub number: String,
    pub date: NaiveDate,
    /// Set once when the slice is created; editing `date` does not move it
    pub due_date: NaiveDate,
    pub currency: String,
    /// Percentage, `7.0` means 7%
    #[serde(deserialize_with = "lenient_number")]
    pub tax_rate: f64,
}

impl InvoiceDetails {
    /// Default invoice details issued on `date`
    pub fn issued_on(date: NaiveDate) -> Self {
        Self {
            number: "INV-2025-001".to_string(),
            date,
            due_date: date
                .checked_add_days(Days::new(DEFAULT_DUE_DAYS))
                .unwrap_or(date),
            currency: "USD".to_string(),
            tax_rate: 7.0,
        }
    }
}

impl Default for InvoiceDetails {
    fn default() -> Self {
        Self::issued_on(Local::now().date_naive())
    }
}

/// Shipment metadata, filled in per shipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogisticsDetails {
    pub origin: String,
    pub destination: String,
    pub vessel: String,
    pub bol_number: String,
    pub incoterms: String,
    pub container_no: String,
}

/// Identifies one field of [`LogisticsDetails`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogisticsField {
    Origin,
    Destination,
    Vessel,
    BolNumber,
    Incoterms,
    ContainerNo,
}

impl LogisticsField {
    /// Display order of the logistics strip
    pub const ALL: [LogisticsField; 6] = [
        LogisticsField::Origin,
        LogisticsField::Destination,
        LogisticsField::Vessel,
        LogisticsField::BolNumber,
        LogisticsField::Incoterms,
        LogisticsField::ContainerNo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LogisticsField::Origin => "Origin",
            LogisticsField::Destination => "Destination",
            LogisticsField::Vessel => "Vessel",
            LogisticsField::BolNumber => "BOL Number",
            LogisticsField::Incoterms => "Incoterms",
            LogisticsField::ContainerNo => "Container No",
        }
    }
}

impl LogisticsDetails {
    pub fn get(&self, field: LogisticsField) -> &str {
        match field {
            LogisticsField::Origin => &self.origin,
            LogisticsField::Destination => &self.destination,
            LogisticsField::Vessel => &self.vessel,
            LogisticsField::BolNumber => &self.bol_number,
            LogisticsField::Incoterms => &self.incoterms,
            LogisticsField::ContainerNo => &self.container_no,
        }
    }

    pub fn get_mut(&mut self, field: LogisticsField) -> &mut String {
        match field {
            LogisticsField::Origin => &mut self.origin,
            LogisticsField::Destination => &mut self.destination,
            LogisticsField::Vessel => &mut self.vessel,
            LogisticsField::BolNumber => &mut self.bol_number,
            LogisticsField::Incoterms => &mut self.incoterms,
            LogisticsField::ContainerNo => &mut self.container_no,
        }
    }
}

/// A bill-to or ship-to party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyAddress {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub contact: String,
}

impl PartyAddress {
    /// "City, ST 12345" line, skipping empty parts
    pub fn locality(&self) -> String {
        locality_line(&self.city, &self.state, &self.zip)
    }
}

impl CompanyInfo {
    pub fn locality(&self) -> String {
        locality_line(&self.city, &self.state, &self.zip)
    }
}

fn locality_line(city: &str, state: &str, zip: &str) -> String {
    let region = [state, zip]
        .iter()
        .filter(|s| !s.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    match (city.trim().is_empty(), region.is_empty()) {
        (true, _) => region,
        (false, true) => city.to_string(),
        (false, false) => format!("{}, {}", city, region),
    }
}

/// One row of shipped goods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
    /// Unique within the session, derived from the creation time in ms
    pub id: u64,
    pub description: String,
    pub sku: String,
    #[serde(deserialize_with = "lenient_number")]
    pub quantity: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub unit_price: f64,
    /// Kilograms per unit
    #[serde(deserialize_with = "lenient_number")]
    pub weight: f64,
    pub unit: String,
    /// Centimeters
    #[serde(rename = "dimL", deserialize_with = "lenient_number")]
    pub dim_l: f64,
    #[serde(rename = "dimW", deserialize_with = "lenient_number")]
    pub dim_w: f64,
    #[serde(rename = "dimH", deserialize_with = "lenient_number")]
    pub dim_h: f64,
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new(0)
    }
}

impl LineItem {
    /// A fresh "New Item" row: one piece, everything else zero
    pub fn new(id: u64) -> Self {
        Self {
            id,
            description: "New Item".to_string(),
            sku: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
            weight: 0.0,
            unit: "pcs".to_string(),
            dim_l: 0.0,
            dim_w: 0.0,
            dim_h: 0.0,
        }
    }

    /// quantity × unit price
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// quantity × unit weight, in kg
    pub fn line_weight(&self) -> f64 {
        self.quantity * self.weight
    }

    /// Volume of one unit in cubic meters
    pub fn unit_volume(&self) -> f64 {
        self.dim_l * self.dim_w * self.dim_h / 1_000_000.0
    }

    /// Apply a single-field edit
    pub fn apply(&mut self, update: ItemUpdate) {
        match update {
            ItemUpdate::Description(v) => self.description = v,
            ItemUpdate::Sku(v) => self.sku = v,
            ItemUpdate::Unit(v) => self.unit = v,
            ItemUpdate::Quantity(v) => self.quantity = sanitize_number(v),
            ItemUpdate::UnitPrice(v) => self.unit_price = sanitize_number(v),
            ItemUpdate::Weight(v) => self.weight = sanitize_number(v),
            ItemUpdate::DimL(v) => self.dim_l = sanitize_number(v),
            ItemUpdate::DimW(v) => self.dim_w = sanitize_number(v),
            ItemUpdate::DimH(v) => self.dim_h = sanitize_number(v),
        }
    }
}

/// A typed edit of one line item field
#[derive(Debug, Clone, PartialEq)]
pub enum ItemUpdate {
    Description(String),
    Sku(String),
    Unit(String),
    Quantity(f64),
    UnitPrice(f64),
    Weight(f64),
    DimL(f64),
    DimW(f64),
    DimH(f64),
}

/// Clamp a user-supplied number to a finite, non-negative value
pub fn sanitize_number(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse free text as a quantity or amount, falling back to 0
pub fn coerce_number(text: &str) -> f64 {
    sanitize_number(text.trim().parse().unwrap_or(0.0))
}

/// Accepts a JSON number or numeric string; anything else decodes as 0
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => sanitize_number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => coerce_number(&s),
        _ => 0.0,
    })
}
