pub mod catalog;
pub mod constants;
pub mod impose;
pub mod layout;
mod options;
pub mod settings;
mod stats;
mod types;

pub use catalog::{CachedCatalog, DefaultCatalog, SheetCatalog, StandardCatalog};
pub use impose::{sequence_all, sequence_for_sheet, total_sheets};
pub use layout::{Document, maximize_n_up, optimize};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
