use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use super::category::SkillCategory;
use crate::errors::CatalogError;

pub type CategoryWeights = BTreeMap<SkillCategory, f64>;

/// A mini-game and the skill categories it exercises.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCatalogEntry {
    pub game_id: String,
    pub title: String,
    pub description: String,
    pub target_sector: String,
    pub skills: Vec<String>,
    pub category_weights: CategoryWeights,
}

impl GameCatalogEntry {
    pub fn weight_for(&self, category: SkillCategory) -> Option<f64> {
        self.category_weights.get(&category).copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = SkillCategory> + '_ {
        self.category_weights.keys().copied()
    }
}

/// Catalog entry as written in a JSON catalog file. Category keys are free
/// strings here and get narrowed to [`SkillCategory`] on load.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalogEntry {
    #[serde(alias = "gameId")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_sector: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(alias = "metrics")]
    pub category_weights: HashMap<String, f64>,
}

/// Order-stable, read-only lookup table of games.
///
/// Always holds at least one entry; the first entry doubles as the default
/// recommendation.
#[derive(Debug, Clone)]
pub struct GameCatalog {
    entries: Vec<GameCatalogEntry>,
    index: HashMap<String, usize>,
}

impl GameCatalog {
    pub fn new(entries: Vec<GameCatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            validate_entry(entry)?;
            if index.insert(entry.game_id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateGame(entry.game_id.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    pub fn from_raw(raw_entries: Vec<RawCatalogEntry>) -> Result<Self, CatalogError> {
        let entries = raw_entries
            .into_iter()
            .map(convert_raw_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw_entries: Vec<RawCatalogEntry> = serde_json::from_str(json)?;
        Self::from_raw(raw_entries)
    }

    pub fn get(&self, game_id: &str) -> Option<&GameCatalogEntry> {
        self.index.get(game_id).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.index.contains_key(game_id)
    }

    pub fn first(&self) -> &GameCatalogEntry {
        &self.entries[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameCatalogEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[GameCatalogEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

fn validate_entry(entry: &GameCatalogEntry) -> Result<(), CatalogError> {
    if entry.category_weights.is_empty() {
        return Err(CatalogError::NoCategories(entry.game_id.clone()));
    }

    for (category, &weight) in &entry.category_weights {
        if !(weight > 0.0 && weight <= 1.0) {
            return Err(CatalogError::InvalidWeight {
                game_id: entry.game_id.clone(),
                category: category.to_string(),
                weight,
            });
        }
    }

    Ok(())
}

fn convert_raw_entry(raw: RawCatalogEntry) -> Result<GameCatalogEntry, CatalogError> {
    let mut category_weights = CategoryWeights::new();
    let mut unknown = HashSet::new();

    for (name, weight) in raw.category_weights {
        match name.parse::<SkillCategory>() {
            Ok(category) => {
                if category_weights.insert(category, weight).is_some() {
                    return Err(CatalogError::DuplicateCategory {
                        game_id: raw.id,
                        category: category.to_string(),
                    });
                }
            }
            Err(_) => {
                unknown.insert(name);
            }
        }
    }

    if !unknown.is_empty() {
        let mut names: Vec<_> = unknown.into_iter().collect();
        names.sort();
        warn!(
            "Ignoring unknown skill categories for game {}: {}",
            raw.id,
            names.join(", ")
        );
    }

    Ok(GameCatalogEntry {
        game_id: raw.id,
        title: raw.title,
        description: raw.description,
        target_sector: raw.target_sector,
        skills: raw.skills,
        category_weights,
    })
}
