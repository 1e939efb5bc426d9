use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use press_impose::constants::{
    DEFAULT_STANDARD_SIZE_TOLERANCE_PT, inches_to_pt, mm_to_pt, pt_to_inches,
};
use press_impose::layout::find_standard_size;
use press_impose::{
    DefaultCatalog, Document, DuplexMethod, ImposeError, ImpositionConfig, ImpositionMode,
    SheetSequence, SheetSize, StandardCatalog,
};

#[derive(Parser)]
#[command(name = "presst", about = "Print imposition tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the press sheet and grid giving the most copies of a document
    Layout {
        /// Document width
        #[arg(long)]
        width: f32,

        /// Document height
        #[arg(long)]
        height: f32,

        /// Unit for all dimensions
        #[arg(long, default_value = "pt", value_enum)]
        unit: UnitArg,

        /// Built-in sheet catalog to search
        #[arg(long, default_value = "default", value_enum)]
        catalog: CatalogArg,

        /// Candidate sheet as NAME=LONGxSHORT; replaces the catalog
        #[arg(long = "sheet", value_parser = parse_sheet_spec)]
        sheets: Vec<SheetSpec>,

        /// Bleed allowance override (same unit as the dimensions)
        #[arg(long)]
        bleed: Option<f32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show which page lands in every slot of every sheet
    Sequence {
        /// Number of source pages
        #[arg(long)]
        pages: usize,

        /// Imposition mode
        #[arg(long, default_value = "stack", value_enum)]
        mode: ModeArg,

        /// Columns per sheet face
        #[arg(long, default_value = "1")]
        columns: usize,

        /// Rows per sheet face
        #[arg(long, default_value = "1")]
        rows: usize,

        /// Print both sides of each sheet
        #[arg(long)]
        duplex: bool,

        /// Booklet only: leave the outer two pages at each end for a separate cover
        #[arg(long)]
        no_cover: bool,

        /// Keep back faces in reading order instead of mirroring for work-and-turn
        #[arg(long)]
        perfecting: bool,

        /// Only show this sheet (0-based)
        #[arg(long)]
        sheet: Option<usize>,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Pt,
    In,
    Mm,
}

#[derive(Clone, Copy, ValueEnum)]
enum CatalogArg {
    Default,
    Standard,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Stack,
    Repeat,
    Booklet,
    CollateCut,
}

impl UnitArg {
    fn to_pt(self, value: f32) -> f32 {
        match self {
            UnitArg::Pt => value,
            UnitArg::In => inches_to_pt(value),
            UnitArg::Mm => mm_to_pt(value),
        }
    }
}

impl From<ModeArg> for ImpositionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Stack => Self::Stack,
            ModeArg::Repeat => Self::Repeat,
            ModeArg::Booklet => Self::Booklet,
            ModeArg::CollateCut => Self::CollateCut,
        }
    }
}

/// A `--sheet` argument before unit conversion
#[derive(Clone, Debug)]
struct SheetSpec {
    name: String,
    long_side: f32,
    short_side: f32,
}

fn parse_sheet_spec(s: &str) -> std::result::Result<SheetSpec, ImposeError> {
    let invalid = || ImposeError::InvalidConfig(format!("Expected NAME=LONGxSHORT, got '{s}'"));

    let (name, dims) = s.split_once('=').ok_or_else(invalid)?;
    let (a, b) = dims
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let a: f32 = a.trim().parse().map_err(|_| invalid())?;
    let b: f32 = b.trim().parse().map_err(|_| invalid())?;
    if name.trim().is_empty() || a <= 0.0 || b <= 0.0 {
        return Err(invalid());
    }

    Ok(SheetSpec {
        name: name.trim().to_string(),
        long_side: a.max(b),
        short_side: a.min(b),
    })
}

fn format_face(face: &[Option<usize>], per_row: usize) -> String {
    face.chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|slot| match slot {
                    Some(page) => format!("{page:>4}"),
                    None => "   -".to_string(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" |")
}

fn print_sheet(index: usize, sequence: &SheetSequence, per_row: usize) {
    println!("  Sheet {index}");
    println!("    front: {}", format_face(&sequence.front, per_row));
    if !sequence.back.is_empty() {
        println!("    back:  {}", format_face(&sequence.back, per_row));
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            width,
            height,
            unit,
            catalog,
            sheets,
            bleed,
            json,
        } => {
            let candidates: Vec<SheetSize> = if sheets.is_empty() {
                match catalog {
                    CatalogArg::Default => DefaultCatalog::sheets(),
                    CatalogArg::Standard => StandardCatalog::sheets(),
                }
            } else {
                sheets
                    .into_iter()
                    .map(|s| SheetSize::new(s.name, unit.to_pt(s.long_side), unit.to_pt(s.short_side)))
                    .collect()
            };

            let mut document = Document::new(unit.to_pt(width), unit.to_pt(height));
            if let Some(bleed) = bleed {
                document = document.with_bleed_allowance(unit.to_pt(bleed));
            }
            log::debug!(
                "Searching {} sheets for a {}x{}pt document",
                candidates.len(),
                document.width,
                document.height
            );

            let Some(result) = press_impose::optimize(&document, &candidates) else {
                anyhow::bail!("No sheet fits a {width}x{height} document");
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Best layout:");
            println!("  Sheet: {} ({})", result.sheet_name, result.sheet_orientation);
            println!(
                "  Grid: {} x {} = {} up{}",
                result.columns,
                result.rows,
                result.copies,
                if result.document_rotated { " (rotated)" } else { "" }
            );
            println!("  Waste: {:.1} sq in", pt_to_inches(pt_to_inches(result.waste)));
            match find_standard_size(document.width, document.height, DEFAULT_STANDARD_SIZE_TOLERANCE_PT) {
                Some(standard) => println!("  Bleed: {}pt ({} trim size)", result.bleed_allowance, standard.name),
                None => println!("  Bleed: {}pt", result.bleed_allowance),
            }
        }

        Commands::Sequence {
            pages,
            mode,
            columns,
            rows,
            duplex,
            no_cover,
            perfecting,
            sheet,
            stats_only,
            json,
        } => {
            let duplex_method = if perfecting {
                DuplexMethod::Perfecting
            } else {
                DuplexMethod::WorkAndTurn
            };
            let config = ImpositionConfig::new(mode.into(), columns, rows, duplex)?
                .with_include_cover(!no_cover)
                .with_duplex_method(duplex_method);

            let stats = press_impose::calculate_statistics(pages, &config);
            let sheets: Vec<(usize, SheetSequence)> = match sheet {
                Some(index) => vec![(index, press_impose::sequence_for_sheet(index, pages, &config))],
                None => press_impose::sequence_all(pages, &config)
                    .into_iter()
                    .enumerate()
                    .collect(),
            };

            if json {
                let value = if stats_only {
                    serde_json::json!({ "config": config, "statistics": stats })
                } else {
                    let sheets: Vec<_> = sheets
                        .iter()
                        .map(|(index, seq)| {
                            serde_json::json!({ "sheet": index, "front": seq.front, "back": seq.back })
                        })
                        .collect();
                    serde_json::json!({ "config": config, "statistics": stats, "sheets": sheets })
                };
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("Imposition Statistics:");
            println!("  Source pages: {}", stats.source_pages);
            println!("  Output sheets: {}", stats.output_sheets);
            println!("  Output faces: {}", stats.output_faces);
            println!("  Filled slots: {}", stats.filled_slots);
            println!("  Blank slots: {}", stats.blank_slots);
            if let Some(padded) = stats.padded_pages {
                println!("  Padded pages: {}", padded);
            }

            if stats_only {
                return Ok(());
            }

            let per_row = match config.mode() {
                ImpositionMode::Booklet => 2,
                _ => config.columns(),
            };
            println!("Sheets ({}):", config.mode());
            for (index, sequence) in &sheets {
                print_sheet(*index, sequence, per_row);
            }
        }
    }

    Ok(())
}
