//! DeckBldr Engine library.
//!
//! Application side of the deck builder:
//!
//! - `infrastructure/` - catalog importer (JSON files to domain types)
//! - `use_cases/` - loadout snapshot and the sheet pipeline

pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::{Catalog, CatalogError, CatalogImporter};
pub use use_cases::{DeckSheet, Loadout, SheetRow, SheetUseCases};
