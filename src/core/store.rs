//! Document state container
//!
//! Holds the six persisted slices and is the only way to mutate them. Every
//! committed mutation runs [`DocumentStore::on_change`], which writes all
//! slices back to storage and flashes the "Saved locally" status.

use std::time::{Duration, Instant};

use serde::Serialize;

use super::model::{
    CompanyInfo, InvoiceDetails, ItemUpdate, LineItem, LogisticsDetails, PartyAddress,
};
use super::status::TransientStatus;
use super::storage::{self, SliceKey, Storage, StorageError};

pub const SAVED_MESSAGE: &str = "Saved locally";
pub const CLEARED_MESSAGE: &str = "Form cleared";

/// A destructive action that needs the user's confirmation first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    /// Wipe storage and restore every slice to its defaults
    ResetAll,
    /// Empty customers, logistics and items; keep company and invoice details
    ClearForm,
}

impl DestructiveAction {
    pub fn title(self) -> &'static str {
        match self {
            DestructiveAction::ResetAll => "Reset Data",
            DestructiveAction::ClearForm => "Clear Form",
        }
    }

    /// Confirmation prompt shown before running the action
    pub fn prompt(self) -> &'static str {
        match self {
            DestructiveAction::ResetAll => {
                "Are you sure? This will clear all data and restore defaults."
            }
            DestructiveAction::ClearForm => {
                "Clear customer, logistics and items? This will NOT remove company info or invoice metadata."
            }
        }
    }

    /// Run the action against `store`. Only call once the user confirmed.
    pub fn apply(self, store: &mut DocumentStore) {
        match self {
            DestructiveAction::ResetAll => store.reset_all(),
            DestructiveAction::ClearForm => store.clear_form(),
        }
    }
}

/// The document being edited plus its persistence
pub struct DocumentStore {
    storage: Box<dyn Storage>,
    company: CompanyInfo,
    invoice: InvoiceDetails,
    logistics: LogisticsDetails,
    bill_to: PartyAddress,
    ship_to: PartyAddress,
    items: Vec<LineItem>,
    /// Highest item id handed out this session
    last_id: u64,
    status: TransientStatus,
}

impl DocumentStore {
    /// Load every slice from `storage`, falling back to defaults per slice
    pub fn load(storage: Box<dyn Storage>, status_duration: Duration) -> Self {
        let mut store = Self {
            storage,
            company: CompanyInfo::default(),
            invoice: InvoiceDetails::default(),
            logistics: LogisticsDetails::default(),
            bill_to: PartyAddress::default(),
            ship_to: PartyAddress::default(),
            items: Vec::new(),
            last_id: 0,
            status: TransientStatus::new(status_duration),
        };
        store.reload();
        store
    }

    fn reload(&mut self) {
        let storage = &*self.storage;
        self.company = storage::load(storage, SliceKey::Company, CompanyInfo::default());
        self.invoice = storage::load(storage, SliceKey::InvoiceDetails, InvoiceDetails::default());
        self.logistics = storage::load(storage, SliceKey::Logistics, LogisticsDetails::default());
        self.bill_to = storage::load(storage, SliceKey::BillTo, PartyAddress::default());
        self.ship_to = storage::load(storage, SliceKey::ShipTo, PartyAddress::default());
        self.items = storage::load(storage, SliceKey::Items, Vec::new());
        self.last_id = 0;
        self.ensure_unique_ids();

        tracing::info!("Loaded document with {} line items", self.items.len());
    }

    /// Reassign ids that collide with an earlier item
    fn ensure_unique_ids(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.last_id = self.items.iter().map(|item| item.id).max().unwrap_or(0);
        for item in &mut self.items {
            if !seen.insert(item.id) {
                self.last_id += 1;
                tracing::debug!("Reassigning duplicate item id {} -> {}", item.id, self.last_id);
                item.id = self.last_id;
                seen.insert(item.id);
            }
        }
    }

    /// A fresh id from the current time, always above every earlier id
    fn next_id(&mut self) -> u64 {
        let millis = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    pub fn company(&self) -> &CompanyInfo {
        &self.company
    }

    pub fn invoice(&self) -> &InvoiceDetails {
        &self.invoice
    }

    pub fn logistics(&self) -> &LogisticsDetails {
        &self.logistics
    }

    pub fn bill_to(&self) -> &PartyAddress {
        &self.bill_to
    }

    pub fn ship_to(&self) -> &PartyAddress {
        &self.ship_to
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn status(&self) -> &TransientStatus {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut TransientStatus {
        &mut self.status
    }

    #[cfg(test)]
    pub fn storage(&self) -> &dyn Storage {
        &*self.storage
    }

    /// Replace company info. Returns whether anything changed.
    pub fn set_company(&mut self, company: CompanyInfo) -> bool {
        if self.company == company {
            return false;
        }
        self.company = company;
        self.on_change();
        true
    }

    pub fn set_invoice(&mut self, invoice: InvoiceDetails) -> bool {
        if self.invoice == invoice {
            return false;
        }
        self.invoice = invoice;
        self.on_change();
        true
    }

    pub fn set_logistics(&mut self, logistics: LogisticsDetails) -> bool {
        if self.logistics == logistics {
            return false;
        }
        self.logistics = logistics;
        self.on_change();
        true
    }

    pub fn set_bill_to(&mut self, bill_to: PartyAddress) -> bool {
        if self.bill_to == bill_to {
            return false;
        }
        self.bill_to = bill_to;
        self.on_change();
        true
    }

    pub fn set_ship_to(&mut self, ship_to: PartyAddress) -> bool {
        if self.ship_to == ship_to {
            return false;
        }
        self.ship_to = ship_to;
        self.on_change();
        true
    }

    /// Append a "New Item" row and return its id
    pub fn add_item(&mut self) -> u64 {
        let id = self.next_id();
        self.items.push(LineItem::new(id));
        self.on_change();
        id
    }

    /// Edit one field of the item with `id`. Unknown ids are ignored.
    pub fn update_item(&mut self, id: u64, update: ItemUpdate) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        let before = item.clone();
        item.apply(update);
        if *item == before {
            return false;
        }
        self.on_change();
        true
    }

    /// Remove the item with `id`, keeping the order of the rest
    pub fn delete_item(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return false;
        }
        self.on_change();
        true
    }

    /// Empty customers, logistics and items, and drop their saved keys.
    /// Company info and invoice details are left untouched.
    pub fn clear_form(&mut self) {
        self.bill_to = PartyAddress::default();
        self.ship_to = PartyAddress::default();
        self.logistics = LogisticsDetails::default();
        self.items.clear();

        for key in SliceKey::FORM {
            if let Err(e) = self.storage.remove(key.as_str()) {
                tracing::warn!("{}", e);
            }
        }

        tracing::info!("Cleared form");
        self.status.show(CLEARED_MESSAGE, Instant::now());
    }

    /// Wipe storage and restore every slice to its defaults. The in-memory
    /// reset happens even when storage cannot be cleared.
    pub fn reset_all(&mut self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to clear storage: {}", e);
        }
        self.company = CompanyInfo::default();
        self.invoice = InvoiceDetails::default();
        self.logistics = LogisticsDetails::default();
        self.bill_to = PartyAddress::default();
        self.ship_to = PartyAddress::default();
        self.items.clear();
        self.last_id = 0;
        tracing::info!("Reset all data to defaults");
    }

    /// Persist after a committed mutation
    fn on_change(&mut self) {
        match self.persist_all() {
            Ok(()) => self.status.show(SAVED_MESSAGE, Instant::now()),
            Err(e) => tracing::warn!("Changes kept in memory only: {}", e),
        }
    }

    /// Write all six slices. Every slice is attempted; the first error wins.
    pub fn persist_all(&mut self) -> Result<(), StorageError> {
        let encoded = [
            encode(SliceKey::Company, &self.company),
            encode(SliceKey::InvoiceDetails, &self.invoice),
            encode(SliceKey::Logistics, &self.logistics),
            encode(SliceKey::BillTo, &self.bill_to),
            encode(SliceKey::ShipTo, &self.ship_to),
            encode(SliceKey::Items, &self.items),
        ];

        let mut first_error = None;
        for (key, value) in SliceKey::ALL.into_iter().zip(encoded) {
            let result = value.and_then(|json| self.storage.set(key.as_str(), &json));
            if let Err(e) = result {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn encode<T: Serialize>(key: SliceKey, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.as_str().to_string(),
        source,
    })
}
