use press_impose::*;

#[test]
fn test_new_config() {
    let config = ImpositionConfig::new(ImpositionMode::Repeat, 3, 4, true).unwrap();
    assert_eq!(config.mode(), ImpositionMode::Repeat);
    assert_eq!(config.columns(), 3);
    assert_eq!(config.rows(), 4);
    assert!(config.is_duplex());
    assert!(config.include_cover());
    assert_eq!(config.duplex_method(), DuplexMethod::WorkAndTurn);
    assert_eq!(config.slots_per_face(), 12);
}

#[test]
fn test_default_config() {
    let config = ImpositionConfig::default();
    assert_eq!(config.mode(), ImpositionMode::Stack);
    assert_eq!((config.columns(), config.rows()), (1, 1));
    assert!(!config.is_duplex());
}

#[test]
fn test_empty_grid_rejected() {
    let err = ImpositionConfig::new(ImpositionMode::Stack, 0, 2, false).unwrap_err();
    assert_eq!(
        err,
        ImposeError::InvalidConfig("Columns must be at least 1".to_string())
    );

    let err = ImpositionConfig::new(ImpositionMode::Stack, 2, 0, false).unwrap_err();
    assert_eq!(
        err,
        ImposeError::InvalidConfig("Rows must be at least 1".to_string())
    );
}

#[test]
fn test_from_settings() {
    let config = ImpositionConfig::from_settings("collateCut", 2, 5, false).unwrap();
    assert_eq!(config.mode(), ImpositionMode::CollateCut);
    assert_eq!(config.slots_per_face(), 10);

    assert!(ImpositionConfig::from_settings("stack", -1, 2, false).is_err());
    assert!(ImpositionConfig::from_settings("stack", 2, -3, false).is_err());
    assert!(ImpositionConfig::from_settings("stack", 0, 2, false).is_err());
    assert!(matches!(
        ImpositionConfig::from_settings("gang", 2, 2, false),
        Err(ImposeError::InvalidConfig(_))
    ));
}

#[test]
fn test_builders() {
    let config = ImpositionConfig::new(ImpositionMode::Booklet, 1, 1, false)
        .unwrap()
        .with_include_cover(false)
        .with_duplex_method(DuplexMethod::Perfecting);
    assert!(!config.include_cover());
    assert_eq!(config.duplex_method(), DuplexMethod::Perfecting);
}

#[test]
fn test_layout_to_config() {
    let layout = maximize_n_up(612.0, 792.0, &[SheetSize::new("Tabloid", 1224.0, 792.0)]).unwrap();
    let config = layout.to_config(ImpositionMode::Stack, true).unwrap();
    assert_eq!((config.columns(), config.rows()), (layout.columns, layout.rows));
    assert!(config.is_duplex());
}

#[test]
fn test_oversized_grid_rejected() {
    let err = ImpositionConfig::new(ImpositionMode::Stack, usize::MAX, 2, false).unwrap_err();
    assert!(matches!(err, ImposeError::InvalidConfig(_)));
    assert!(err.to_string().contains("too large"));

    // Slots must stay addressable on both faces, even for simplex
    assert!(ImpositionConfig::new(ImpositionMode::Repeat, usize::MAX / 2 + 1, 1, false).is_err());
    assert!(ImpositionConfig::new(ImpositionMode::Booklet, 1, usize::MAX, false).is_err());
    assert!(ImpositionConfig::from_settings("stack", i64::MAX, i64::MAX, true).is_err());

    // Largest duplex-addressable grid is accepted and counts without overflow
    let config = ImpositionConfig::new(ImpositionMode::Stack, usize::MAX / 2, 1, true).unwrap();
    assert_eq!(total_sheets(5, &config), 1);
}
