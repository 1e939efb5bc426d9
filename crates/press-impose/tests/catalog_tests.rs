use press_impose::*;
use std::cell::Cell;

/// Catalog that counts reads and returns a fixed answer
struct CountingCatalog {
    reads: Cell<usize>,
    answer: Result<Vec<SheetSize>>,
}

impl CountingCatalog {
    fn new(answer: Result<Vec<SheetSize>>) -> Self {
        Self {
            reads: Cell::new(0),
            answer,
        }
    }
}

impl SheetCatalog for CountingCatalog {
    fn sheet_sizes(&self) -> Result<Vec<SheetSize>> {
        self.reads.set(self.reads.get() + 1);
        self.answer.clone()
    }
}

#[test]
fn test_default_catalog_order() {
    let names: Vec<String> = DefaultCatalog::sheets().into_iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec![
            "Super B (13 x 19 in)",
            "Custom (12.5 x 19 in)",
            "Digital Press (12 x 18 in)",
            "Tabloid (11 x 17 in)",
            "Letter (8.5 x 11 in)",
        ]
    );
}

#[test]
fn test_catalog_sides_are_normalized() {
    for sheet in DefaultCatalog::sheets().into_iter().chain(StandardCatalog::sheets()) {
        assert!(sheet.long_side >= sheet.short_side, "{}", sheet.name);
        assert!(sheet.short_side > 0.0);
    }
}

#[test]
fn test_cache_reads_once() {
    let custom = vec![SheetSize::new("Press", 1300.0, 900.0)];
    let catalog = CachedCatalog::new(CountingCatalog::new(Ok(custom.clone())));
    assert!(!catalog.is_cached());

    assert_eq!(catalog.sheets(), custom.as_slice());
    assert_eq!(catalog.sheets(), custom.as_slice());
    assert!(catalog.is_cached());
    assert_eq!(catalog.provider().reads.get(), 1);
}

#[test]
fn test_cache_invalidate() {
    let mut catalog = CachedCatalog::new(CountingCatalog::new(Ok(DefaultCatalog::sheets())));
    catalog.sheets();
    catalog.invalidate();
    assert!(!catalog.is_cached());
    catalog.sheets();
    assert_eq!(catalog.provider().reads.get(), 2);
}

#[test]
fn test_failed_read_falls_back_to_defaults() {
    let catalog = CachedCatalog::new(CountingCatalog::new(Err(ImposeError::Catalog(
        "settings store unavailable".to_string(),
    ))));
    assert_eq!(catalog.sheets(), DefaultCatalog::sheets().as_slice());
}

#[test]
fn test_empty_read_falls_back_to_defaults() {
    let catalog = CachedCatalog::new(CountingCatalog::new(Ok(Vec::new())));
    assert_eq!(catalog.sheets(), DefaultCatalog::sheets().as_slice());
    // Fallback is cached too
    catalog.sheets();
    assert_eq!(catalog.provider().reads.get(), 1);
}

#[test]
fn test_plain_list_is_a_catalog() {
    let sheets = vec![SheetSize::new("Only", 800.0, 600.0)];
    assert_eq!(sheets.sheet_sizes().unwrap(), sheets);
    assert_eq!(sheets.as_slice().sheet_sizes().unwrap(), sheets);
}

#[test]
fn test_optimizer_over_cached_catalog() {
    let catalog = CachedCatalog::new(StandardCatalog);
    let result = maximize_n_up(612.0, 792.0, catalog.sheets()).unwrap();
    assert_eq!(result.sheet_name, "Tabloid (11 x 17 in)");
    assert_eq!(result.copies, 2);
}
