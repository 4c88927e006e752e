pub mod config_service;
pub mod paths;
pub mod seed;

pub use crate::config_service::ConfigService;
pub use crate::paths::ScoutPaths;
pub use crate::seed::{DEFAULT_SEED_TOML, default_seed, load_seed, load_seed_from_path, parse_seed};
