//! Use cases - loadout assembly and sheet building.

pub mod loadout;
pub mod sheet;

pub use loadout::Loadout;
pub use sheet::{DeckSheet, SheetRow, SheetUseCases};
