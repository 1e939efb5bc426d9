//! Initial configuration for a job
//!
//! A job can start from a configuration saved with it, from a rule keyed
//! on its trim size, from the optimizer, or from a 1x1 stack as a last
//! resort. Storage of saved configurations and rules stays with the
//! caller; this only decides between them.

use crate::options::ImpositionConfig;
use crate::types::*;

/// Where a resolved configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ConfigSource {
    /// Previously saved with the job
    Saved,
    /// Per-trim-size default
    TrimSizeRule,
    /// Computed by the N-up optimizer
    Optimized,
    /// Nothing else available
    Fallback,
}

/// A per-trim-size imposition rule
#[derive(Debug, Clone, PartialEq)]
pub struct TrimSizeRule {
    /// Press sheet the rule prints on
    pub sheet_name: String,
    pub columns: usize,
    pub rows: usize,
    pub is_duplex: bool,
}

/// Chosen configuration and the sheet it targets, if known
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub config: ImpositionConfig,
    pub sheet_name: Option<String>,
    pub source: ConfigSource,
}

/// Pick the starting configuration for a job.
///
/// Order: saved configuration, trim-size rule, optimizer layout, 1x1
/// stack. Rules and optimizer layouts always start in Stack mode. A rule
/// with an empty grid is skipped.
pub fn resolve_initial_config(
    saved: Option<ImpositionConfig>,
    rule: Option<&TrimSizeRule>,
    layout: Option<&LayoutResult>,
) -> ResolvedConfig {
    if let Some(config) = saved {
        return ResolvedConfig {
            config,
            sheet_name: None,
            source: ConfigSource::Saved,
        };
    }

    if let Some(rule) = rule {
        match ImpositionConfig::new(ImpositionMode::Stack, rule.columns, rule.rows, rule.is_duplex) {
            Ok(config) => {
                return ResolvedConfig {
                    config,
                    sheet_name: Some(rule.sheet_name.clone()),
                    source: ConfigSource::TrimSizeRule,
                };
            }
            Err(e) => log::warn!("Ignoring trim size rule for {}: {}", rule.sheet_name, e),
        }
    }

    if let Some(layout) = layout {
        if let Ok(config) = layout.to_config(ImpositionMode::Stack, false) {
            return ResolvedConfig {
                config,
                sheet_name: Some(layout.sheet_name.clone()),
                source: ConfigSource::Optimized,
            };
        }
    }

    ResolvedConfig {
        config: ImpositionConfig::default(),
        sheet_name: None,
        source: ConfigSource::Fallback,
    }
}
