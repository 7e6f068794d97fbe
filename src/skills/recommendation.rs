use super::types::{Recommendation, SkillAssessment, SkillProfile};
use crate::config::settings::RecommendationSettings;
use crate::domain::{GameCatalog, GameCatalogEntry, SkillCategory};

/// Pick the next game for an actor from their profile.
///
/// `has_attempts` separates a fresh actor from one whose attempts all
/// scored zero or no longer map to a game.
pub fn recommend(
    profile: &SkillProfile,
    has_attempts: bool,
    catalog: &GameCatalog,
    settings: &RecommendationSettings,
) -> Recommendation {
    if !has_attempts {
        return Recommendation {
            dominant_category: SkillAssessment::NotYetDetermined,
            weakest_category: SkillAssessment::NotYetDetermined,
            recommended_game_id: catalog.first().game_id.clone(),
        };
    }

    let (dominant, _) = profile.strongest();
    let (weakest, _) = profile.weakest();
    let game = find_training_game(catalog, weakest, settings.weight_threshold)
        .unwrap_or_else(|| catalog.first());

    Recommendation {
        dominant_category: SkillAssessment::Category(dominant),
        weakest_category: SkillAssessment::Category(weakest),
        recommended_game_id: game.game_id.clone(),
    }
}

/// First game in catalog order that weighs `category` at least `threshold`.
pub fn find_training_game(
    catalog: &GameCatalog,
    category: SkillCategory,
    threshold: f64,
) -> Option<&GameCatalogEntry> {
    catalog
        .iter()
        .find(|game| game.weight_for(category).is_some_and(|weight| weight >= threshold))
}
