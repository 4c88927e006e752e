//! Discovery use case.
//!
//! Turns the raw filter/sort input of a discovery view into a typed catalog
//! query, and hands back everything the view renders for one result page.

use std::sync::Arc;

use scout_core::{
    Result, SearchCriteria, SearchParams, SortKey, TalentCatalogService, TalentRecord,
};
use scout_infrastructure::ConfigService;

use crate::catalog::InMemoryTalentCatalog;
use crate::favorites::OptimisticFavorites;
use crate::keywords::extract_keywords;

/// One rendered result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryPage {
    /// Matching talents in display order
    pub talents: Vec<TalentRecord>,
    /// Ordering that was applied
    pub sort: SortKey,
    /// Tags echoed under the search box
    pub keywords: Vec<String>,
}

/// Use case for the discovery and favorites views.
pub struct DiscoveryUseCase {
    catalog: Arc<dyn TalentCatalogService>,
    default_sort: SortKey,
}

impl DiscoveryUseCase {
    pub fn new(catalog: Arc<dyn TalentCatalogService>, default_sort: SortKey) -> Self {
        Self {
            catalog,
            default_sort,
        }
    }

    /// Wires an in-memory catalog from the `[catalog]` config section.
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let settings = config.catalog_settings();
        let catalog = InMemoryTalentCatalog::from_settings(&settings)?;
        Ok(Self::new(Arc::new(catalog), settings.default_sort))
    }

    /// The catalog behind this use case, for direct toggles.
    pub fn catalog(&self) -> Arc<dyn TalentCatalogService> {
        self.catalog.clone()
    }

    /// Runs one search.
    ///
    /// `sort` is the raw sort dropdown value; `None` or blank means the
    /// configured default.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Validation` for an unknown island, category or
    /// sort key. Nothing is queried in that case.
    pub async fn discover(&self, params: &SearchParams, sort: Option<&str>) -> Result<DiscoveryPage> {
        let criteria = SearchCriteria::try_from(params)?;
        let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse::<SortKey>()?,
            None => self.default_sort,
        };
        let keywords = params
            .query
            .as_deref()
            .map(extract_keywords)
            .unwrap_or_default();

        let talents = self.catalog.search_sorted(&criteria, sort).await?;
        tracing::debug!(
            "[Discovery] {} talents, sort={}, keywords={:?}",
            talents.len(),
            sort,
            keywords
        );

        Ok(DiscoveryPage {
            talents,
            sort,
            keywords,
        })
    }

    /// Local state for the favorites grid.
    pub async fn favorites(&self) -> Result<OptimisticFavorites> {
        let favorites = self.catalog.list_favorites().await?;
        Ok(OptimisticFavorites::favorites_only(favorites))
    }
}
