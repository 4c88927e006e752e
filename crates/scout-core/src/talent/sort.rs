//! Ordering of search results.
//!
//! Sorting never touches the caller's slice: it returns a new vector, and
//! every ordering is stable so that equal keys keep their input order.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::TalentRecord;
use crate::error::{Result, ScoutError};

/// Order in which search results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Best match first
    #[default]
    #[serde(alias = "match")]
    MatchScoreDescending,
    /// Weakest match first
    #[serde(alias = "match-asc")]
    MatchScoreAscending,
    /// By name, accent- and case-insensitive
    #[serde(alias = "name")]
    NameAlphabetical,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [
        SortKey::MatchScoreDescending,
        SortKey::MatchScoreAscending,
        SortKey::NameAlphabetical,
    ];

    /// The short value a sort dropdown submits.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::MatchScoreDescending => "match",
            SortKey::MatchScoreAscending => "match-asc",
            SortKey::NameAlphabetical => "name",
        }
    }

    fn snake_case(&self) -> &'static str {
        match self {
            SortKey::MatchScoreDescending => "match_score_descending",
            SortKey::MatchScoreAscending => "match_score_ascending",
            SortKey::NameAlphabetical => "name_alphabetical",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| {
                key.as_str().eq_ignore_ascii_case(wanted)
                    || key.snake_case().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ScoutError::validation("sortKey", format!("unknown sort key '{}'", s)))
    }
}

/// Returns a sorted copy of `records`.
pub fn sort_records(records: &[TalentRecord], key: SortKey) -> Vec<TalentRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::MatchScoreDescending => sorted.sort_by_key(|r| Reverse(r.match_score)),
        SortKey::MatchScoreAscending => sorted.sort_by_key(|r| r.match_score),
        SortKey::NameAlphabetical => {
            sorted.sort_by_cached_key(|r| (collation_key(&r.name), r.name.clone()))
        }
    }
    sorted
}

/// Collation key in three levels, compared in order: letters with case and
/// accents folded away, then unaccented before accented, then lowercase
/// before uppercase. "Óscar" therefore sorts next to "Oscar" rather than
/// after "Zoe", and "ana" lands just before "Ana".
fn collation_key(name: &str) -> (String, Vec<bool>, Vec<bool>) {
    let mut base = String::with_capacity(name.len());
    let mut accented = Vec::new();
    let mut upper = Vec::new();
    for c in name.chars() {
        for lower in c.to_lowercase() {
            let folded = strip_diacritic(lower);
            base.push(folded);
            accented.push(folded != lower);
            upper.push(c.is_uppercase());
        }
    }
    (base, accented, upper)
}

fn strip_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
