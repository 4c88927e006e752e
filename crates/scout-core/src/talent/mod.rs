//! Talent domain module.
//!
//! This module contains the talent record model, search criteria, result
//! ordering and the catalog service interface.
//!
//! # Module Structure
//!
//! - `model`: Core domain types (`TalentRecord`, `Role`, `Island`, `MatchScore`)
//! - `criteria`: View input (`SearchParams`) and validated filters (`SearchCriteria`)
//! - `sort`: `SortKey` and the stable, non-destructive `sort_records`
//! - `service`: The `TalentCatalogService` trait
//!
//! # Usage
//!
//! ```ignore
//! use scout_core::talent::{SearchCriteria, SortKey, TalentCatalogService};
//! ```

mod criteria;
mod model;
mod service;
mod sort;

// Re-export public API
pub use criteria::{ALL_SENTINEL, SearchCriteria, SearchParams};
pub use model::{Island, MatchScore, Role, TalentId, TalentRecord};
pub use service::TalentCatalogService;
pub use sort::{SortKey, sort_records};
