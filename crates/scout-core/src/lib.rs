//! Domain layer for Scout, a talent casting catalog.
//!
//! Holds the talent model, filter and sort semantics, the catalog service
//! interface and the shared error type. No I/O happens here.

pub mod config;
pub mod error;
pub mod talent;

// Re-export common types
pub use config::{CatalogSettings, RootConfig};
pub use error::{Result, ScoutError};
pub use talent::{
    Island, MatchScore, Role, SearchCriteria, SearchParams, SortKey, TalentCatalogService,
    TalentId, TalentRecord, sort_records,
};
