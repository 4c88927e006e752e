//! Application layer for Scout.
//!
//! This crate owns the canonical talent catalog and provides the use cases a
//! view layer drives: discovery (filter, sort, keyword tags) and optimistic
//! favorite toggling.

pub mod catalog;
pub mod discovery_usecase;
pub mod favorites;
pub mod keywords;
pub mod telemetry;

pub use catalog::InMemoryTalentCatalog;
pub use discovery_usecase::{DiscoveryPage, DiscoveryUseCase};
pub use favorites::{DisplayMode, OptimisticFavorites, PendingToggle};
pub use keywords::extract_keywords;
pub use telemetry::init_tracing;
