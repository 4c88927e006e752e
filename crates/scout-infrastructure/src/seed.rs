//! Talent seed loading.
//!
//! A seed is a TOML document with one `[[talent]]` table per record. The
//! built-in catalog ships inside the binary; `CatalogSettings::seed_path`
//! points at a replacement file.

use std::fs;
use std::path::Path;

use scout_core::{CatalogSettings, Island, MatchScore, Result, Role, ScoutError, TalentRecord};
use serde::Deserialize;

/// The built-in catalog.
pub const DEFAULT_SEED_TOML: &str = include_str!("../seed/talents.toml");

/// One `[[talent]]` entry as written in a seed file.
///
/// Role and island stay plain strings here so that an unknown value surfaces
/// as a `Validation` error naming the field, not as a generic TOML error.
#[derive(Debug, Clone, Deserialize)]
pub struct TalentSeedDto {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub island: String,
    #[serde(rename = "match")]
    pub match_score: u8,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub attrs: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
}

#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(rename = "talent", default)]
    talents: Vec<TalentSeedDto>,
}

impl TryFrom<TalentSeedDto> for TalentRecord {
    type Error = ScoutError;

    fn try_from(dto: TalentSeedDto) -> Result<Self> {
        let role: Role = dto.role.parse()?;
        let island: Island = dto.island.parse()?;
        let match_score = MatchScore::new(dto.match_score)?;

        let record = TalentRecord::new(
            dto.id,
            dto.name,
            role,
            island,
            match_score,
            dto.image,
            dto.attrs,
        )?;
        Ok(record.with_favorite(dto.favorite))
    }
}

/// Parses a seed document into records, preserving file order.
///
/// # Errors
///
/// - `ScoutError::Serialization`: the text is not valid TOML for a seed
/// - `ScoutError::Validation`: a record has an unknown role/island, an
///   out-of-range score or a blank name
pub fn parse_seed(content: &str) -> Result<Vec<TalentRecord>> {
    let document: SeedDocument = toml::from_str(content)?;
    document
        .talents
        .into_iter()
        .map(TalentRecord::try_from)
        .collect()
}

/// Loads and parses a seed file.
pub fn load_seed_from_path(path: &Path) -> Result<Vec<TalentRecord>> {
    let content = fs::read_to_string(path).map_err(|e| {
        ScoutError::io(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    let records = parse_seed(&content)?;
    tracing::info!(
        "[Seed] Loaded {} talents from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parses the built-in catalog.
pub fn default_seed() -> Result<Vec<TalentRecord>> {
    let records = parse_seed(DEFAULT_SEED_TOML)?;
    tracing::debug!("[Seed] Using built-in catalog ({} talents)", records.len());
    Ok(records)
}

/// Loads the seed selected by `settings`: the configured file when set,
/// the built-in catalog otherwise.
pub fn load_seed(settings: &CatalogSettings) -> Result<Vec<TalentRecord>> {
    match &settings.seed_path {
        Some(path) => load_seed_from_path(path),
        None => default_seed(),
    }
}
