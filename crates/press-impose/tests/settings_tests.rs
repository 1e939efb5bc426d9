use press_impose::settings::*;
use press_impose::*;

fn tabloid_layout() -> LayoutResult {
    maximize_n_up(612.0, 792.0, &DefaultCatalog::sheets()).unwrap()
}

fn rule() -> TrimSizeRule {
    TrimSizeRule {
        sheet_name: "Digital Press (12 x 18 in)".to_string(),
        columns: 3,
        rows: 3,
        is_duplex: true,
    }
}

#[test]
fn test_saved_config_wins() {
    let saved = ImpositionConfig::new(ImpositionMode::Booklet, 1, 2, false).unwrap();
    let layout = tabloid_layout();
    let resolved = resolve_initial_config(Some(saved), Some(&rule()), Some(&layout));

    assert_eq!(resolved.source, ConfigSource::Saved);
    assert_eq!(resolved.config, saved);
    assert_eq!(resolved.sheet_name, None);
}

#[test]
fn test_rule_beats_optimizer() {
    let layout = tabloid_layout();
    let resolved = resolve_initial_config(None, Some(&rule()), Some(&layout));

    assert_eq!(resolved.source, ConfigSource::TrimSizeRule);
    assert_eq!(resolved.config.mode(), ImpositionMode::Stack);
    assert_eq!((resolved.config.columns(), resolved.config.rows()), (3, 3));
    assert!(resolved.config.is_duplex());
    assert_eq!(resolved.sheet_name.as_deref(), Some("Digital Press (12 x 18 in)"));
}

#[test]
fn test_invalid_rule_is_skipped() {
    let broken = TrimSizeRule {
        columns: 0,
        ..rule()
    };
    let layout = tabloid_layout();
    let resolved = resolve_initial_config(None, Some(&broken), Some(&layout));

    assert_eq!(resolved.source, ConfigSource::Optimized);
}

#[test]
fn test_optimizer_layout() {
    let layout = tabloid_layout();
    let resolved = resolve_initial_config(None, None, Some(&layout));

    assert_eq!(resolved.source, ConfigSource::Optimized);
    assert_eq!(resolved.config.mode(), ImpositionMode::Stack);
    assert_eq!((resolved.config.columns(), resolved.config.rows()), (1, 2));
    assert!(!resolved.config.is_duplex());
    assert_eq!(resolved.sheet_name.as_deref(), Some("Tabloid (11 x 17 in)"));
}

#[test]
fn test_fallback() {
    let resolved = resolve_initial_config(None, None, None);

    assert_eq!(resolved.source, ConfigSource::Fallback);
    assert_eq!(resolved.config, ImpositionConfig::default());
    assert_eq!(resolved.sheet_name, None);
}
