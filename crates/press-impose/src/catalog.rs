//! Press sheet catalogs
//!
//! The optimizer takes a plain slice of sheets. Where that slice comes
//! from (stored settings, a hardcoded list) is up to the caller; this
//! module provides the provider trait, the built-in lists and an explicit
//! read-through cache.

use crate::types::*;
use std::sync::OnceLock;

/// Source of candidate press sheets
pub trait SheetCatalog {
    /// Read the current sheet list. Empty is a valid answer.
    fn sheet_sizes(&self) -> Result<Vec<SheetSize>>;
}

impl SheetCatalog for Vec<SheetSize> {
    fn sheet_sizes(&self) -> Result<Vec<SheetSize>> {
        Ok(self.clone())
    }
}

impl SheetCatalog for [SheetSize] {
    fn sheet_sizes(&self) -> Result<Vec<SheetSize>> {
        Ok(self.to_vec())
    }
}

/// Sheets stocked by default when no catalog is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl DefaultCatalog {
    pub fn sheets() -> Vec<SheetSize> {
        vec![
            SheetSize::from_inches("Super B (13 x 19 in)", 19.0, 13.0),
            SheetSize::from_inches("Custom (12.5 x 19 in)", 19.0, 12.5),
            SheetSize::from_inches("Digital Press (12 x 18 in)", 18.0, 12.0),
            SheetSize::from_inches("Tabloid (11 x 17 in)", 17.0, 11.0),
            SheetSize::from_inches("Letter (8.5 x 11 in)", 11.0, 8.5),
        ]
    }
}

impl SheetCatalog for DefaultCatalog {
    fn sheet_sizes(&self) -> Result<Vec<SheetSize>> {
        Ok(Self::sheets())
    }
}

/// Common office and press sheet sizes, US and ISO
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalog;

impl StandardCatalog {
    pub fn sheets() -> Vec<SheetSize> {
        vec![
            SheetSize::from_inches("Letter (8.5 x 11 in)", 11.0, 8.5),
            SheetSize::from_inches("Legal (8.5 x 14 in)", 14.0, 8.5),
            SheetSize::from_inches("Tabloid (11 x 17 in)", 17.0, 11.0),
            SheetSize::from_inches("Digital Press (12 x 18 in)", 18.0, 12.0),
            SheetSize::from_inches("Super B (13 x 19 in)", 19.0, 13.0),
            SheetSize::from_inches("A4 (210 x 297 mm)", 11.69, 8.27),
            SheetSize::from_inches("A3 (297 x 420 mm)", 16.54, 11.69),
            SheetSize::from_inches("A2 (420 x 594 mm)", 23.39, 16.54),
        ]
    }
}

impl SheetCatalog for StandardCatalog {
    fn sheet_sizes(&self) -> Result<Vec<SheetSize>> {
        Ok(Self::sheets())
    }
}

/// Read-through cache over a catalog provider.
///
/// The provider is queried once. A failed or empty read falls back to
/// [`DefaultCatalog`] and the fallback is cached too. Call
/// [`CachedCatalog::invalidate`] to force a fresh read.
#[derive(Debug)]
pub struct CachedCatalog<C> {
    provider: C,
    cache: OnceLock<Vec<SheetSize>>,
}

impl<C: SheetCatalog> CachedCatalog<C> {
    pub fn new(provider: C) -> Self {
        Self {
            provider,
            cache: OnceLock::new(),
        }
    }

    /// Cached sheet list, fetching it on first use
    pub fn sheets(&self) -> &[SheetSize] {
        self.cache.get_or_init(|| match self.provider.sheet_sizes() {
            Ok(sizes) if !sizes.is_empty() => {
                log::debug!("Loaded {} sheet sizes", sizes.len());
                sizes
            }
            Ok(_) => {
                log::warn!("No sheet sizes found, using default sizes");
                DefaultCatalog::sheets()
            }
            Err(e) => {
                log::warn!("Failed to load sheet sizes, falling back to defaults: {}", e);
                DefaultCatalog::sheets()
            }
        })
    }

    /// Drop the cached list; the next read queries the provider again
    pub fn invalidate(&mut self) {
        self.cache.take();
    }

    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    pub fn provider(&self) -> &C {
        &self.provider
    }
}

impl<C: SheetCatalog> SheetCatalog for CachedCatalog<C> {
    fn sheet_sizes(&self) -> Result<Vec<SheetSize>> {
        Ok(self.sheets().to_vec())
    }
}
