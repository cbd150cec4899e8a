//! UI components for ShipDocs

pub mod confirm;
pub mod document;
pub mod header;
pub mod items;
pub mod parties;
pub mod summary;
pub mod toolbar;
