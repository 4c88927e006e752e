//! Search criteria for the talent catalog.
//!
//! `SearchParams` is what a view hands over (plain strings, possibly the
//! `"all"` sentinel). `SearchCriteria` is the validated form the catalog
//! evaluates.

use serde::{Deserialize, Serialize};

use super::model::{Island, Role, TalentRecord};
use crate::error::{Result, ScoutError};

/// Sentinel a filter dropdown uses for "no restriction".
pub const ALL_SENTINEL: &str = "all";

/// Raw, string-typed filter input as produced by a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub island: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Validated filter set. Every filter is optional and they combine with AND.
///
/// `SearchCriteria::default()` matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    island: Option<Island>,
    category: Option<Role>,
    /// Lower-cased free-text query; `None` when empty.
    query: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_island(mut self, island: Island) -> Self {
        self.island = Some(island);
        self
    }

    pub fn with_category(mut self, category: Role) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the free-text query. An empty query disables the text filter;
    /// whitespace is part of the needle.
    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.query = normalize_query(query.as_ref());
        self
    }

    pub fn island(&self) -> Option<Island> {
        self.island
    }

    pub fn category(&self) -> Option<Role> {
        self.category
    }

    /// The lower-cased query, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// True when no filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.island.is_none() && self.category.is_none() && self.query.is_none()
    }

    /// Evaluates every active filter against `record`.
    pub fn matches(&self, record: &TalentRecord) -> bool {
        if let Some(island) = self.island
            && record.island != island
        {
            return false;
        }
        if let Some(category) = self.category
            && record.role != category
        {
            return false;
        }
        match &self.query {
            None => true,
            Some(needle) => {
                record.name.to_lowercase().contains(needle.as_str())
                    || record
                        .attributes
                        .iter()
                        .any(|attr| attr.to_lowercase().contains(needle.as_str()))
            }
        }
    }
}

impl TryFrom<SearchParams> for SearchCriteria {
    type Error = ScoutError;

    fn try_from(params: SearchParams) -> Result<Self> {
        SearchCriteria::try_from(&params)
    }
}

impl TryFrom<&SearchParams> for SearchCriteria {
    type Error = ScoutError;

    fn try_from(params: &SearchParams) -> Result<Self> {
        let island = active_filter(params.island.as_deref())
            .map(str::parse::<Island>)
            .transpose()?;
        let category = active_filter(params.category.as_deref())
            .map(str::parse::<Role>)
            .transpose()?;
        let query = params.query.as_deref().and_then(normalize_query);

        Ok(Self {
            island,
            category,
            query,
        })
    }
}

/// Returns the filter value unless it is absent, empty or the `"all"` sentinel.
fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
}

fn normalize_query(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::talent::model::MatchScore;

    fn record(name: &str, role: Role, island: Island, attrs: &[&str]) -> TalentRecord {
        TalentRecord::new(
            1,
            name,
            role,
            island,
            MatchScore::new(90).unwrap(),
            "",
            attrs.iter().map(|a| a.to_string()).collect(),
        )
        .unwrap()
    }

    fn params(island: Option<&str>, category: Option<&str>, query: Option<&str>) -> SearchParams {
        SearchParams {
            island: island.map(String::from),
            category: category.map(String::from),
            query: query.map(String::from),
        }
    }

    #[test]
    fn test_all_sentinel_and_empty_disable_filters() {
        let criteria =
            SearchCriteria::try_from(params(Some("all"), Some("all"), Some(""))).unwrap();
        assert!(criteria.is_unfiltered());

        let criteria = SearchCriteria::try_from(params(Some(""), None, None)).unwrap();
        assert!(criteria.is_unfiltered());
    }

    #[test]
    fn test_sentinel_is_exact() {
        let err = SearchCriteria::try_from(params(Some("ALL"), None, None)).unwrap_err();
        assert!(matches!(err, ScoutError::Validation { field: "island", .. }));
    }

    #[test]
    fn test_whitespace_query_is_a_literal_needle() {
        let criteria = SearchCriteria::try_from(params(None, None, Some("   "))).unwrap();
        assert_eq!(criteria.query(), Some("   "));
        assert!(!criteria.is_unfiltered());

        let aitana = record("Aitana García", Role::Actor, Island::Tenerife, &["Natural"]);
        assert!(!criteria.matches(&aitana));
        assert!(!SearchCriteria::new().with_query(" ana").matches(&aitana));
        assert!(SearchCriteria::new().with_query("ana g").matches(&aitana));
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let err = SearchCriteria::try_from(params(Some("Mallorca"), None, None)).unwrap_err();
        assert!(matches!(err, ScoutError::Validation { field: "island", .. }));

        let err = SearchCriteria::try_from(params(None, Some("Singer"), None)).unwrap_err();
        assert!(matches!(err, ScoutError::Validation { field: "category", .. }));
    }

    #[test]
    fn test_params_are_parsed() {
        let criteria =
            SearchCriteria::try_from(params(Some("Tenerife"), Some("Actor"), Some(" Barba ")))
                .unwrap();
        assert_eq!(criteria.island(), Some(Island::Tenerife));
        assert_eq!(criteria.category(), Some(Role::Actor));
        assert_eq!(criteria.query(), Some(" barba "));
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let ana = record("Ana García", Role::Actor, Island::Tenerife, &[]);
        assert!(SearchCriteria::new().with_query("ana").matches(&ana));
        assert!(SearchCriteria::new().with_query("ANA").matches(&ana));
        assert!(SearchCriteria::new().with_query("garcía").matches(&ana));
    }

    #[test]
    fn test_query_matches_any_attribute() {
        let talent = record("Marc Torres", Role::Model, Island::Fuerteventura, &["Análisis", "Pecas"]);
        assert!(SearchCriteria::new().with_query("ANÁ").matches(&talent));
        assert!(SearchCriteria::new().with_query("pecas").matches(&talent));
        assert!(!SearchCriteria::new().with_query("barba").matches(&talent));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let talent = record("Javier Mendoza", Role::Actor, Island::GranCanaria, &["Barba"]);
        let both = SearchCriteria::new()
            .with_island(Island::GranCanaria)
            .with_category(Role::Actor);
        assert!(both.matches(&talent));

        let wrong_island = both.clone().with_island(Island::Tenerife);
        assert!(!wrong_island.matches(&talent));

        let wrong_query = both.with_query("rubia");
        assert!(!wrong_query.matches(&talent));
    }

    #[test]
    fn test_search_params_deserialize_from_partial_json() {
        let params: SearchParams =
            serde_json::from_str(r#"{"island":"La Palma","query":"natural"}"#).unwrap();
        assert_eq!(params.island.as_deref(), Some("La Palma"));
        assert!(params.category.is_none());
    }
}
