use crate::types::*;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Validated imposition configuration.
///
/// The grid is checked once here, so sequencing can assume
/// `columns >= 1` and `rows >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ImpositionConfig {
    mode: ImpositionMode,
    columns: usize,
    rows: usize,
    is_duplex: bool,
    include_cover: bool,
    duplex_method: DuplexMethod,
}

impl Default for ImpositionConfig {
    /// Single-copy simplex stack
    fn default() -> Self {
        Self {
            mode: ImpositionMode::Stack,
            columns: 1,
            rows: 1,
            is_duplex: false,
            include_cover: true,
            duplex_method: DuplexMethod::default(),
        }
    }
}

impl ImpositionConfig {
    /// Create a configuration, rejecting an empty grid
    pub fn new(mode: ImpositionMode, columns: usize, rows: usize, is_duplex: bool) -> Result<Self> {
        if columns == 0 {
            return Err(ImposeError::InvalidConfig(
                "Columns must be at least 1".to_string(),
            ));
        }
        if rows == 0 {
            return Err(ImposeError::InvalidConfig(
                "Rows must be at least 1".to_string(),
            ));
        }
        // Both faces of a duplex sheet must stay addressable
        if columns.checked_mul(rows).and_then(|slots| slots.checked_mul(2)).is_none() {
            return Err(ImposeError::InvalidConfig(format!(
                "Grid of {columns}x{rows} is too large"
            )));
        }

        Ok(Self {
            mode,
            columns,
            rows,
            is_duplex,
            include_cover: true,
            duplex_method: DuplexMethod::default(),
        })
    }

    /// Create a configuration from loosely typed settings (mode name and
    /// signed grid values, as they arrive from a form or saved record).
    pub fn from_settings(mode: &str, columns: i64, rows: i64, is_duplex: bool) -> Result<Self> {
        let mode: ImpositionMode = mode.parse()?;
        let columns = usize::try_from(columns).map_err(|_| {
            ImposeError::InvalidConfig(format!("Columns must be at least 1, got {columns}"))
        })?;
        let rows = usize::try_from(rows).map_err(|_| {
            ImposeError::InvalidConfig(format!("Rows must be at least 1, got {rows}"))
        })?;
        Self::new(mode, columns, rows, is_duplex)
    }

    /// Set whether booklet covers are paginated with the interior
    pub fn with_include_cover(mut self, include_cover: bool) -> Self {
        self.include_cover = include_cover;
        self
    }

    pub fn with_duplex_method(mut self, duplex_method: DuplexMethod) -> Self {
        self.duplex_method = duplex_method;
        self
    }

    pub fn mode(&self) -> ImpositionMode {
        self.mode
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_duplex(&self) -> bool {
        self.is_duplex
    }

    pub fn include_cover(&self) -> bool {
        self.include_cover
    }

    pub fn duplex_method(&self) -> DuplexMethod {
        self.duplex_method
    }

    /// Grid cells on one face
    pub fn slots_per_face(&self) -> usize {
        self.columns * self.rows
    }

    /// Source pages consumed per sheet position (2 for duplex, else 1)
    pub(crate) fn faces_per_sheet(&self) -> usize {
        if self.is_duplex { 2 } else { 1 }
    }

    /// Whether back faces are mirrored row by row for work-and-turn
    pub(crate) fn mirrors_back_rows(&self) -> bool {
        self.is_duplex && self.columns > 1 && self.duplex_method == DuplexMethod::WorkAndTurn
    }
}

impl LayoutResult {
    /// Build a configuration using this layout's grid
    pub fn to_config(&self, mode: ImpositionMode, is_duplex: bool) -> Result<ImpositionConfig> {
        ImpositionConfig::new(mode, self.columns, self.rows, is_duplex)
    }
}
