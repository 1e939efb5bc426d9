use crate::constants::inches_to_pt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImposeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Sheet catalog error: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// 1-based source page number
pub type PageNumber = usize;

/// Sheet orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Portrait: short side runs horizontally
    #[default]
    Portrait,
    /// Landscape: long side runs horizontally
    Landscape,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// A named candidate press sheet.
///
/// Dimensions are in points. Both sides are kept as given; the optimizer
/// tries each orientation itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetSize {
    pub name: String,
    pub long_side: f32,
    pub short_side: f32,
}

impl SheetSize {
    /// Create a sheet from point dimensions. The sides may be given in
    /// either order.
    pub fn new(name: impl Into<String>, side_a: f32, side_b: f32) -> Self {
        Self {
            name: name.into(),
            long_side: side_a.max(side_b),
            short_side: side_a.min(side_b),
        }
    }

    /// Create a sheet from inch dimensions
    pub fn from_inches(name: impl Into<String>, long_side_in: f32, short_side_in: f32) -> Self {
        Self::new(name, inches_to_pt(long_side_in), inches_to_pt(short_side_in))
    }

    /// (width, height) with the given orientation applied
    pub fn dimensions_with_orientation(&self, orientation: Orientation) -> (f32, f32) {
        match orientation {
            Orientation::Portrait => (self.short_side, self.long_side),
            Orientation::Landscape => (self.long_side, self.short_side),
        }
    }

    pub fn area(&self) -> f32 {
        self.long_side * self.short_side
    }
}

/// Imposition schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ImpositionMode {
    /// Pages in reading order, filling every slot before the next face
    #[default]
    Stack,
    /// Every slot on a sheet shows the same page
    Repeat,
    /// Saddle-stitch signature pagination, two pages per row
    Booklet,
    /// Sheets cut into sequential stacks that stay in page order
    CollateCut,
}

impl ImpositionMode {
    pub const ALL: [ImpositionMode; 4] = [
        ImpositionMode::Stack,
        ImpositionMode::Repeat,
        ImpositionMode::Booklet,
        ImpositionMode::CollateCut,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImpositionMode::Stack => "stack",
            ImpositionMode::Repeat => "repeat",
            ImpositionMode::Booklet => "booklet",
            ImpositionMode::CollateCut => "collateCut",
        }
    }
}

impl std::fmt::Display for ImpositionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ImpositionMode {
    type Err = ImposeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stack" => Ok(ImpositionMode::Stack),
            "repeat" => Ok(ImpositionMode::Repeat),
            "booklet" => Ok(ImpositionMode::Booklet),
            "collatecut" | "collate-cut" | "collate_cut" => Ok(ImpositionMode::CollateCut),
            _ => Err(ImposeError::InvalidConfig(format!(
                "Unknown imposition mode: {s}"
            ))),
        }
    }
}

/// How the back face is laid out relative to the front on duplex sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DuplexMethod {
    /// Sheet is flipped left-to-right between passes; each back-face row
    /// is mirrored so it lands under the matching front cell.
    #[default]
    WorkAndTurn,
    /// Back face kept in reading order (no mirroring)
    Perfecting,
}

/// Output of the sheet layout optimizer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutResult {
    pub columns: usize,
    pub rows: usize,
    pub sheet_name: String,
    pub sheet_orientation: Orientation,
    /// Document turned 90° to improve yield
    pub document_rotated: bool,
    pub bleed_allowance: f32,
    /// columns × rows
    pub copies: usize,
    /// Sheet area not covered by documents
    pub waste: f32,
}

/// Page assignment for one physical sheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetSequence {
    pub front: Vec<Option<PageNumber>>,
    /// Empty when the sheet is printed on one side only
    pub back: Vec<Option<PageNumber>>,
}

impl SheetSequence {
    /// Blank sequence with the given face lengths
    pub fn blank(front_len: usize, back_len: usize) -> Self {
        Self {
            front: vec![None; front_len],
            back: vec![None; back_len],
        }
    }

    pub fn is_blank(&self) -> bool {
        self.front.iter().chain(&self.back).all(Option::is_none)
    }

    /// Number of slots holding a page, both faces
    pub fn filled_slots(&self) -> usize {
        self.front.iter().chain(&self.back).flatten().count()
    }
}

/// Statistics about an imposition job
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImpositionStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Total number of physical sheets
    pub output_sheets: usize,
    /// Printed faces (one or two per sheet)
    pub output_faces: usize,
    /// Slots on one face
    pub slots_per_face: usize,
    /// Slots holding a page, all faces
    pub filled_slots: usize,
    /// Slots left blank, all faces
    pub blank_slots: usize,
    /// Page count rounded up to a whole signature (Booklet only)
    pub padded_pages: Option<usize>,
}
