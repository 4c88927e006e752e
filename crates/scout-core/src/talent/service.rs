//! Talent catalog service trait definition.

use async_trait::async_trait;

use super::criteria::SearchCriteria;
use super::model::{TalentId, TalentRecord};
use super::sort::{SortKey, sort_records};
use crate::error::Result;

/// Owner of the canonical talent collection.
///
/// Every read returns snapshots (owned copies); `toggle_favorite` is the only
/// mutation and it is atomic: either the flag flips or an error is returned
/// and nothing changes.
///
/// # Implementation Notes
///
/// Implementations backed by real I/O must serialize concurrent toggles per
/// record id, and must leave state untouched when a call is cancelled before
/// it completes.
#[async_trait]
pub trait TalentCatalogService: Send + Sync {
    /// Returns every record in seed order.
    async fn list_all(&self) -> Result<Vec<TalentRecord>>;

    /// Returns one record.
    ///
    /// # Returns
    ///
    /// - `Ok(TalentRecord)`: the record
    /// - `Err(ScoutError::NotFound)`: no record has this id
    async fn get_by_id(&self, id: TalentId) -> Result<TalentRecord>;

    /// Returns the records matching every active filter of `criteria`, in
    /// seed order. An empty result is not an error.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<TalentRecord>>;

    /// Flips the favorite flag of one record.
    ///
    /// # Returns
    ///
    /// - `Ok(bool)`: the new value of `is_favorite`
    /// - `Err(ScoutError::NotFound)`: unknown id, catalog unchanged
    async fn toggle_favorite(&self, id: TalentId) -> Result<bool>;

    /// Returns every favorite in seed order.
    async fn list_favorites(&self) -> Result<Vec<TalentRecord>>;

    /// Returns a sorted copy of `records`; the input is not modified.
    fn sort(&self, records: &[TalentRecord], key: SortKey) -> Vec<TalentRecord> {
        sort_records(records, key)
    }

    /// Convenience for the common search-then-sort flow of a discovery view.
    async fn search_sorted(
        &self,
        criteria: &SearchCriteria,
        key: SortKey,
    ) -> Result<Vec<TalentRecord>> {
        let found = self.search(criteria).await?;
        Ok(sort_records(&found, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;
    use crate::talent::model::{Island, MatchScore, Role};
    use std::sync::Mutex;

    // Minimal catalog backed by a Mutex<Vec>, only to exercise the provided methods
    struct MockCatalog {
        records: Mutex<Vec<TalentRecord>>,
    }

    impl MockCatalog {
        fn new() -> Self {
            let make = |id, name: &str, role, score| {
                TalentRecord::new(
                    id,
                    name,
                    role,
                    Island::Tenerife,
                    MatchScore::new(score).unwrap(),
                    "",
                    Vec::new(),
                )
                .unwrap()
            };
            Self {
                records: Mutex::new(vec![
                    make(1, "Lucía Pérez", Role::Commercial, 85),
                    make(2, "Diego Lima", Role::Actor, 90),
                    make(3, "Alba Socas", Role::Commercial, 88),
                ]),
            }
        }
    }

    #[async_trait]
    impl TalentCatalogService for MockCatalog {
        async fn list_all(&self) -> Result<Vec<TalentRecord>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: TalentId) -> Result<TalentRecord> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| ScoutError::not_found("talent", id))
        }

        async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<TalentRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| criteria.matches(r))
                .cloned()
                .collect())
        }

        async fn toggle_favorite(&self, id: TalentId) -> Result<bool> {
            let mut records = self.records.lock().unwrap();
            let record = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| ScoutError::not_found("talent", id))?;
            record.is_favorite = !record.is_favorite;
            Ok(record.is_favorite)
        }

        async fn list_favorites(&self) -> Result<Vec<TalentRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.is_favorite)
                .cloned()
                .collect())
        }
    }

    #[tokio::test]
    async fn test_search_sorted_filters_then_orders() {
        let catalog = MockCatalog::new();
        let criteria = SearchCriteria::new().with_category(Role::Commercial);

        let found = catalog
            .search_sorted(&criteria, SortKey::MatchScoreDescending)
            .await
            .unwrap();

        let ids: Vec<_> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn test_default_sort_delegates_to_sort_records() {
        let catalog = MockCatalog::new();
        let all = catalog.list_all().await.unwrap();

        let by_name = catalog.sort(&all, SortKey::NameAlphabetical);

        let names: Vec<_> = by_name.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alba Socas", "Diego Lima", "Lucía Pérez"]);
        assert_eq!(all[0].id, 1);
    }
}
