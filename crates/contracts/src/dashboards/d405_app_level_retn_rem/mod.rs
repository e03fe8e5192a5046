//! D405: application level retention remediation report.
//!
//! Shared between the backend (which serves the datasets) and the frontend
//! dashboard (which filters, summarises and exports them).

pub mod columns;
pub mod dto;
pub mod export;
pub mod filter;
pub mod tiles;

pub use dto::TabularDataset;
pub use export::ExportTable;
pub use filter::{FilterToggle, RetnRemFilter};
pub use tiles::RetnRemTiles;
