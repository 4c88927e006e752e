//! Optimistic favorite toggling for a view.
//!
//! A view flips the heart icon before the catalog confirms, then reconciles:
//! a confirmation keeps the flip, a failure puts the record back exactly as
//! it was. `OptimisticFavorites` owns the view's local copies and does both
//! halves, so a view cannot forget the revert.

use scout_core::{Result, ScoutError, TalentCatalogService, TalentId, TalentRecord};

/// How the local list reacts to a talent losing its favorite flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Discovery grid: the record stays, only its flag changes.
    Browse,
    /// Favorites grid: the record disappears as soon as it is un-favorited.
    FavoritesOnly,
}

/// An optimistic change that has not been reconciled yet.
#[derive(Debug)]
#[must_use = "a pending toggle must be reconciled"]
pub struct PendingToggle {
    id: TalentId,
    previous: bool,
    /// Set when the record was taken out of a favorites-only list.
    removed: Option<(usize, TalentRecord)>,
}

impl PendingToggle {
    pub fn id(&self) -> TalentId {
        self.id
    }

    /// The favorite flag before the optimistic flip.
    pub fn previous(&self) -> bool {
        self.previous
    }
}

/// Locally displayed talents with optimistic favorite handling.
#[derive(Debug, Clone)]
pub struct OptimisticFavorites {
    records: Vec<TalentRecord>,
    mode: DisplayMode,
}

impl OptimisticFavorites {
    /// Local state for a discovery grid.
    pub fn new(records: Vec<TalentRecord>) -> Self {
        Self {
            records,
            mode: DisplayMode::Browse,
        }
    }

    /// Local state for a favorites grid.
    pub fn favorites_only(records: Vec<TalentRecord>) -> Self {
        Self {
            records,
            mode: DisplayMode::FavoritesOnly,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// What the view should render right now.
    pub fn records(&self) -> &[TalentRecord] {
        &self.records
    }

    /// Replaces the local list, e.g. after a new search.
    pub fn replace(&mut self, records: Vec<TalentRecord>) {
        self.records = records;
    }

    /// Flips the local copy of `id` before the catalog has answered.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::NotFound` when `id` is not displayed.
    pub fn apply_optimistic(&mut self, id: TalentId) -> Result<PendingToggle> {
        let position = self
            .position(id)
            .ok_or_else(|| ScoutError::not_found("talent", id))?;
        let previous = self.records[position].is_favorite;

        let removed = if self.mode == DisplayMode::FavoritesOnly && previous {
            let mut record = self.records.remove(position);
            record.is_favorite = false;
            Some((position, record))
        } else {
            self.records[position].is_favorite = !previous;
            None
        };

        Ok(PendingToggle {
            id,
            previous,
            removed,
        })
    }

    /// Settles a pending toggle with the catalog's answer.
    ///
    /// On success the confirmed value is kept (it wins over the optimistic
    /// one if they disagree). On failure the record is restored to its
    /// pre-toggle state and the error is handed back for presentation.
    pub fn reconcile(&mut self, pending: PendingToggle, outcome: Result<bool>) -> Result<bool> {
        match outcome {
            Ok(confirmed) => {
                let optimistic = !pending.previous;
                if confirmed != optimistic {
                    tracing::warn!(
                        "[Favorites] Talent {} confirmed as {} but shown as {}, correcting",
                        pending.id,
                        confirmed,
                        optimistic
                    );
                    self.settle(pending, confirmed);
                }
                Ok(confirmed)
            }
            Err(err) => {
                tracing::warn!(
                    "[Favorites] Reverting talent {} after failed toggle: {}",
                    pending.id,
                    err
                );
                let previous = pending.previous;
                self.settle(pending, previous);
                Err(err)
            }
        }
    }

    /// Runs the whole optimistic protocol against `catalog`.
    ///
    /// If the returned future is dropped before the catalog answers, the
    /// optimistic value stays on screen and nothing is reverted.
    pub async fn toggle_via<C>(&mut self, catalog: &C, id: TalentId) -> Result<bool>
    where
        C: TalentCatalogService + ?Sized,
    {
        let pending = self.apply_optimistic(id)?;
        let outcome = catalog.toggle_favorite(id).await;
        self.reconcile(pending, outcome)
    }

    fn position(&self, id: TalentId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Puts the local record for `pending` into state `value`.
    fn settle(&mut self, pending: PendingToggle, value: bool) {
        match pending.removed {
            Some((index, mut record)) => {
                // Only favorites are shown in this mode
                if value {
                    record.is_favorite = true;
                    let index = index.min(self.records.len());
                    self.records.insert(index, record);
                }
            }
            None => {
                let displayed = self.mode == DisplayMode::Browse || value;
                match self.position(pending.id) {
                    Some(position) if displayed => self.records[position].is_favorite = value,
                    Some(position) => {
                        self.records.remove(position);
                    }
                    None => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryTalentCatalog;
    use scout_core::{Island, MatchScore, Role};

    fn talent(id: u32, name: &str) -> TalentRecord {
        TalentRecord::new(
            id,
            name,
            Role::Actor,
            Island::GranCanaria,
            MatchScore::new(90).unwrap(),
            "",
            Vec::new(),
        )
        .unwrap()
    }

    fn flags(view: &OptimisticFavorites) -> Vec<(u32, bool)> {
        view.records().iter().map(|r| (r.id, r.is_favorite)).collect()
    }

    #[test]
    fn test_optimistic_flip_is_visible_before_confirmation() {
        let mut view = OptimisticFavorites::new(vec![talent(1, "A"), talent(2, "B")]);

        let pending = view.apply_optimistic(2).unwrap();

        assert!(!pending.previous());
        assert_eq!(flags(&view), vec![(1, false), (2, true)]);

        assert!(view.reconcile(pending, Ok(true)).unwrap());
        assert_eq!(flags(&view), vec![(1, false), (2, true)]);
    }

    #[test]
    fn test_failure_reverts_to_previous_value() {
        let mut view = OptimisticFavorites::new(vec![talent(1, "A").with_favorite(true)]);

        let pending = view.apply_optimistic(1).unwrap();
        assert_eq!(flags(&view), vec![(1, false)]);

        let err = view
            .reconcile(pending, Err(ScoutError::internal("backend down")))
            .unwrap_err();

        assert!(matches!(err, ScoutError::Internal(_)));
        assert_eq!(flags(&view), vec![(1, true)]);
    }

    #[test]
    fn test_confirmed_value_wins_on_mismatch() {
        let mut view = OptimisticFavorites::new(vec![talent(1, "A")]);

        let pending = view.apply_optimistic(1).unwrap();
        assert!(!view.reconcile(pending, Ok(false)).unwrap());

        assert_eq!(flags(&view), vec![(1, false)]);
    }

    #[test]
    fn test_unknown_local_id_is_not_found() {
        let mut view = OptimisticFavorites::new(vec![talent(1, "A")]);
        assert!(view.apply_optimistic(9).unwrap_err().is_not_found());
        assert_eq!(flags(&view), vec![(1, false)]);
    }

    #[test]
    fn test_favorites_view_removes_then_restores_at_same_index() {
        let mut view = OptimisticFavorites::favorites_only(vec![
            talent(1, "A").with_favorite(true),
            talent(2, "B").with_favorite(true),
            talent(3, "C").with_favorite(true),
        ]);

        let pending = view.apply_optimistic(2).unwrap();
        assert_eq!(flags(&view), vec![(1, true), (3, true)]);

        let _ = view.reconcile(pending, Err(ScoutError::not_found("talent", 2)));

        assert_eq!(flags(&view), vec![(1, true), (2, true), (3, true)]);
    }

    #[test]
    fn test_favorites_view_keeps_removal_on_success() {
        let mut view = OptimisticFavorites::favorites_only(vec![talent(1, "A").with_favorite(true)]);

        let pending = view.apply_optimistic(1).unwrap();
        assert!(!view.reconcile(pending, Ok(false)).unwrap());

        assert!(view.records().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_via_catalog_round_trip() {
        let catalog = InMemoryTalentCatalog::new(vec![talent(1, "A"), talent(2, "B")]).unwrap();
        let mut view = OptimisticFavorites::new(catalog.list_all().await.unwrap());

        assert!(view.toggle_via(&catalog, 2).await.unwrap());

        assert_eq!(flags(&view), vec![(1, false), (2, true)]);
        assert_eq!(catalog.list_favorites().await.unwrap()[0].id, 2);
    }

    #[tokio::test]
    async fn test_toggle_via_reverts_when_catalog_does_not_know_the_id() {
        let catalog = InMemoryTalentCatalog::new(vec![talent(1, "A")]).unwrap();
        // The view shows a stale record the catalog never had
        let mut view = OptimisticFavorites::new(vec![talent(1, "A"), talent(77, "Stale")]);

        let err = view.toggle_via(&catalog, 77).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(flags(&view), vec![(1, false), (77, false)]);
        assert!(catalog.list_favorites().await.unwrap().is_empty());
    }
}
