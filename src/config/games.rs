use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use super::settings::CatalogSettings;
use crate::domain::{GameCatalog, GameCatalogEntry, SkillCategory};
use crate::errors::CatalogError;

/// Built-in game catalog for the platform's mini-games.
///
/// Order matters: the first game is the default recommendation, and
/// recommendations scan games in this order.
pub fn default_games() -> Vec<GameCatalogEntry> {
    use SkillCategory::*;

    vec![
        game(
            "pattern-weaver",
            "Pattern Weaver",
            "Connect dots following a specific pattern.",
            "Stitching, Embroidery",
            &["Precision", "Pattern Recognition"],
            &[(Creative, 0.7), (Practical, 0.3)],
        ),
        game(
            "3d-gift-wrapper",
            "3D Gift Wrapper",
            "Wrap boxes in specific sequences.",
            "Packaging, Logistics",
            &["Spatial Awareness", "Dexterity"],
            &[(Practical, 0.6), (Technical, 0.4)],
        ),
        game(
            "desktop-ranger",
            "Desktop Ranger",
            "Find icons based on auditory/visual cues.",
            "Data Entry, Office Admin",
            &["Computer Literacy", "Listening"],
            &[(Technical, 0.7), (Social, 0.3)],
        ),
        game(
            "color-sorter",
            "Color Sorter",
            "Sort items quickly into bins.",
            "Manufacturing, Sorting",
            &["Attention", "Speed"],
            &[(Analytical, 0.6), (Practical, 0.4)],
        ),
        game(
            "recipe-builder",
            "Recipe Builder",
            "Follow recipes exactly.",
            "Culinary, Hospitality",
            &["Sequencing", "Logic"],
            &[(Analytical, 0.5), (Social, 0.5)],
        ),
    ]
}

fn game(
    game_id: &str,
    title: &str,
    description: &str,
    target_sector: &str,
    skills: &[&str],
    weights: &[(SkillCategory, f64)],
) -> GameCatalogEntry {
    GameCatalogEntry {
        game_id: game_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        target_sector: target_sector.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        category_weights: weights.iter().copied().collect(),
    }
}

pub fn default_catalog() -> Result<GameCatalog, CatalogError> {
    GameCatalog::new(default_games())
}

/// Load the catalog once at startup, from the configured JSON file if any.
pub fn load_catalog(settings: &CatalogSettings) -> Result<Arc<GameCatalog>> {
    let catalog = match &settings.path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
                path: path.display().to_string(),
                source,
            })?;
            let catalog = GameCatalog::from_json_str(&json)
                .with_context(|| format!("Invalid catalog file: {}", path.display()))?;
            info!("Loaded {} games from {}", catalog.len(), path.display());
            catalog
        }
        None => default_catalog().context("Built-in game catalog is invalid")?,
    };

    Ok(Arc::new(catalog))
}
