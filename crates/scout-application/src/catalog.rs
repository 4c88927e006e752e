//! In-memory talent catalog.
//!
//! `InMemoryTalentCatalog` is the single owner of the canonical talent
//! collection. Reads clone out of a `RwLock`; favorite toggles are serialized
//! per record id so that concurrent toggles on one talent net out in some
//! total order.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use scout_core::{
    CatalogSettings, Result, ScoutError, SearchCriteria, TalentCatalogService, TalentId,
    TalentRecord,
};
use tokio::sync::{Mutex, RwLock};

const ENTITY: &str = "talent";

/// Canonical talent collection seeded once at construction.
pub struct InMemoryTalentCatalog {
    /// Records in seed order. Only `is_favorite` ever changes.
    records: RwLock<Vec<TalentRecord>>,
    /// Position of each id in `records`; fixed after seeding.
    positions: HashMap<TalentId, usize>,
    /// One lock per talent with a toggle in flight (or that had one).
    in_flight: Mutex<HashMap<TalentId, Arc<Mutex<()>>>>,
    /// Artificial delay before every operation.
    latency: Duration,
}

impl InMemoryTalentCatalog {
    /// Seeds a catalog from `records`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Validation` when a record is invalid or two
    /// records share an id.
    pub fn new(records: Vec<TalentRecord>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            record.validate()?;
            if positions.insert(record.id, position).is_some() {
                return Err(ScoutError::validation(
                    "id",
                    format!("duplicate talent id {}", record.id),
                ));
            }
        }

        tracing::info!("[Catalog] Seeded with {} talents", records.len());

        Ok(Self {
            records: RwLock::new(records),
            positions,
            in_flight: Mutex::new(HashMap::new()),
            latency: Duration::ZERO,
        })
    }

    /// Builds a catalog from the seed and latency configured in `settings`.
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self> {
        let records = scout_infrastructure::load_seed(settings)?;
        Ok(Self::new(records)?.with_latency(settings.simulated_latency()))
    }

    /// Adds an artificial delay to every call, emulating a remote backend.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of talents in the catalog.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn toggle_lock(&self, id: TalentId) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;
        in_flight.entry(id).or_default().clone()
    }

    async fn collect_where<F>(&self, predicate: F) -> Vec<TalentRecord>
    where
        F: Fn(&TalentRecord) -> bool + Send,
    {
        let records = self.records.read().await;
        records.iter().filter(|&r| predicate(r)).cloned().collect()
    }
}

#[async_trait]
impl TalentCatalogService for InMemoryTalentCatalog {
    async fn list_all(&self) -> Result<Vec<TalentRecord>> {
        self.simulate_latency().await;
        Ok(self.records.read().await.clone())
    }

    async fn get_by_id(&self, id: TalentId) -> Result<TalentRecord> {
        self.simulate_latency().await;
        let position = *self
            .positions
            .get(&id)
            .ok_or_else(|| ScoutError::not_found(ENTITY, id))?;
        let records = self.records.read().await;
        records
            .get(position)
            .cloned()
            .ok_or_else(|| ScoutError::internal(format!("index out of sync for talent {}", id)))
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<TalentRecord>> {
        self.simulate_latency().await;
        let found = self.collect_where(|r| criteria.matches(r)).await;
        tracing::debug!("[Catalog] search {:?} -> {} talents", criteria, found.len());
        Ok(found)
    }

    async fn toggle_favorite(&self, id: TalentId) -> Result<bool> {
        let Some(&position) = self.positions.get(&id) else {
            tracing::warn!("[Catalog] toggle_favorite on unknown talent {}", id);
            return Err(ScoutError::not_found(ENTITY, id));
        };

        // Held for the whole round trip: at most one toggle per id in flight.
        let lock = self.toggle_lock(id).await;
        let _in_flight = lock.lock().await;

        // Every await point comes before the write, so a cancelled toggle
        // leaves the catalog untouched.
        self.simulate_latency().await;

        let mut records = self.records.write().await;
        let record = records
            .get_mut(position)
            .ok_or_else(|| ScoutError::internal(format!("index out of sync for talent {}", id)))?;
        record.is_favorite = !record.is_favorite;

        tracing::info!(
            "[Catalog] Talent {} ({}) favorite -> {}",
            id,
            record.name,
            record.is_favorite
        );
        Ok(record.is_favorite)
    }

    async fn list_favorites(&self) -> Result<Vec<TalentRecord>> {
        self.simulate_latency().await;
        Ok(self.collect_where(|r| r.is_favorite).await)
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
