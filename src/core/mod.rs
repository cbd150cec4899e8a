//! Document model, persistence, derived totals and printing

pub mod config;
pub mod model;
pub mod print;
pub mod status;
pub mod storage;
pub mod store;
pub mod totals;
pub mod view;
