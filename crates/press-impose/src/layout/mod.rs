//! Sheet layout calculations
//!
//! This module handles the geometric side of imposition:
//! - Grid tiling of a document on a sheet (columns, rows, waste)
//! - N-up search across a sheet catalog
//! - Bleed inference from standard page sizes

mod bleed;
mod grid;
mod nup;
mod types;

pub use bleed::*;
pub use grid::*;
pub use nup::*;
pub use types::*;
