//! Talent domain model.
//!
//! A `TalentRecord` is one castable person in the catalog. Category and
//! location are closed enumerations so that malformed input is rejected when
//! it is parsed, not when it is rendered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// Stable identifier of a talent record. Never reused.
pub type TalentId = u32;

/// Casting category of a talent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Role {
    Model,
    Actor,
    Extra,
    Commercial,
}

impl Role {
    /// Every known role, in display order.
    pub const ALL: [Role; 4] = [Role::Model, Role::Actor, Role::Extra, Role::Commercial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Model => "Model",
            Role::Actor => "Actor",
            Role::Extra => "Extra",
            Role::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ScoutError::validation("category", format!("unknown role '{}'", s)))
    }
}

/// Island of the Canary archipelago where a talent is based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Island {
    Tenerife,
    #[serde(rename = "Gran Canaria")]
    GranCanaria,
    Lanzarote,
    Fuerteventura,
    #[serde(rename = "La Palma")]
    LaPalma,
    #[serde(rename = "La Gomera")]
    LaGomera,
    #[serde(rename = "El Hierro")]
    ElHierro,
}

impl Island {
    /// Every island, in display order.
    pub const ALL: [Island; 7] = [
        Island::Tenerife,
        Island::GranCanaria,
        Island::Lanzarote,
        Island::Fuerteventura,
        Island::LaPalma,
        Island::LaGomera,
        Island::ElHierro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Island::Tenerife => "Tenerife",
            Island::GranCanaria => "Gran Canaria",
            Island::Lanzarote => "Lanzarote",
            Island::Fuerteventura => "Fuerteventura",
            Island::LaPalma => "La Palma",
            Island::LaGomera => "La Gomera",
            Island::ElHierro => "El Hierro",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Island {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        Island::ALL
            .into_iter()
            .find(|island| island.as_str() == s)
            .ok_or_else(|| ScoutError::validation("island", format!("unknown island '{}'", s)))
    }
}

/// Relevance score in the closed range 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchScore(u8);

impl MatchScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(ScoutError::validation(
                "matchScore",
                format!("{} is outside 0..={}", value, Self::MAX),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MatchScore {
    type Error = ScoutError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MatchScore> for u8 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One castable person.
///
/// Records handed out by a catalog are snapshots: changing a field on a
/// returned value never reaches the catalog's own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentRecord {
    /// Unique, stable identifier
    pub id: TalentId,
    /// Display name, never blank
    pub name: String,
    /// Casting category
    pub role: Role,
    /// Home island
    pub island: Island,
    /// Relevance score for the current search
    pub match_score: MatchScore,
    /// Opaque reference (URL) to the profile picture
    pub image_ref: String,
    /// Descriptive tags in display order
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Whether the current user saved this talent
    #[serde(default)]
    pub is_favorite: bool,
}

impl TalentRecord {
    /// Creates a record that is not yet a favorite.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Validation` when `name` is blank.
    pub fn new(
        id: TalentId,
        name: impl Into<String>,
        role: Role,
        island: Island,
        match_score: MatchScore,
        image_ref: impl Into<String>,
        attributes: Vec<String>,
    ) -> Result<Self> {
        let record = Self {
            id,
            name: name.into(),
            role,
            island,
            match_score,
            image_ref: image_ref.into(),
            attributes,
            is_favorite: false,
        };
        record.validate()?;
        Ok(record)
    }

    /// Returns the record with its favorite flag set.
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Checks the invariants the type system cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ScoutError::validation(
                "name",
                format!("talent {} has an empty name", self.id),
            ));
        }
        Ok(())
    }
}
