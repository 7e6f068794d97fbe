use log::debug;
use std::collections::BTreeMap;

use super::types::{SkillProfile, SkillScore};
use crate::domain::{AttemptRecord, GameCatalog, SkillCategory};

#[derive(Debug, Default, Clone, Copy)]
struct CategoryTally {
    sum: u64,
    count: u64,
}

impl CategoryTally {
    fn add(&mut self, score: u8) {
        self.sum += u64::from(score);
        self.count += 1;
    }

    /// Mean rounded half up, 0 when nothing contributed.
    fn average(&self) -> SkillScore {
        if self.count == 0 {
            return 0;
        }
        ((2 * self.sum + self.count) / (2 * self.count)) as SkillScore
    }
}

/// Fold attempts into a per-category average.
///
/// Each attempt adds its full score to every category its game lists; the
/// listed weights do not scale the contribution. Attempts on games missing
/// from the catalog contribute nothing.
pub fn build_profile(attempts: &[AttemptRecord], catalog: &GameCatalog) -> SkillProfile {
    let mut tallies: BTreeMap<SkillCategory, CategoryTally> = BTreeMap::new();
    let mut skipped = 0usize;

    for attempt in attempts {
        let Some(game) = catalog.get(&attempt.game_id) else {
            skipped += 1;
            continue;
        };

        for category in game.categories() {
            tallies.entry(category).or_default().add(attempt.score);
        }
    }

    if skipped > 0 {
        debug!("Skipped {} attempts on games missing from the catalog", skipped);
    }

    SkillProfile::from_scores(
        tallies
            .into_iter()
            .map(|(category, tally)| (category, tally.average())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use crate::domain::GameCatalogEntry;
    use chrono::Utc;
    use SkillCategory::*;

    fn attempt(game_id: &str, score: u8) -> AttemptRecord {
        AttemptRecord {
            id: 0,
            actor_id: "ada".to_string(),
            game_id: game_id.to_string(),
            score,
            elapsed_seconds: 30,
            created_at: Utc::now().naive_utc(),
        }
    }

    fn single_game_catalog() -> GameCatalog {
        GameCatalog::new(vec![GameCatalogEntry {
            game_id: "G1".to_string(),
            title: "G1".to_string(),
            description: String::new(),
            target_sector: String::new(),
            skills: Vec::new(),
            category_weights: [(Creative, 0.7), (Practical, 0.3)].into_iter().collect(),
        }])
        .unwrap()
    }

    #[test]
    fn test_no_attempts_gives_zero_profile() {
        let profile = build_profile(&[], &default_catalog().unwrap());
        assert_eq!(profile, SkillProfile::empty());
    }

    #[test]
    fn test_full_score_goes_to_every_listed_category() {
        let attempts = [attempt("G1", 80), attempt("G1", 60)];

        let profile = build_profile(&attempts, &single_game_catalog());

        assert_eq!(profile.get(Creative), 70);
        assert_eq!(profile.get(Practical), 70);
        assert_eq!(profile.get(Analytical), 0);
        assert_eq!(profile.get(Technical), 0);
        assert_eq!(profile.get(Social), 0);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let attempts = [attempt("G1", 70), attempt("G1", 71)];
        assert_eq!(build_profile(&attempts, &single_game_catalog()).get(Creative), 71);

        let attempts = [attempt("G1", 0), attempt("G1", 0), attempt("G1", 1)];
        assert_eq!(build_profile(&attempts, &single_game_catalog()).get(Creative), 0);

        let attempts = [attempt("G1", 1), attempt("G1", 1), attempt("G1", 0)];
        assert_eq!(build_profile(&attempts, &single_game_catalog()).get(Creative), 1);
    }

    #[test]
    fn test_categories_average_over_their_own_attempts() {
        let catalog = default_catalog().unwrap();
        // color-sorter: Analytical + Practical; recipe-builder: Analytical + Social
        let attempts = [attempt("color-sorter", 90), attempt("recipe-builder", 40)];

        let profile = build_profile(&attempts, &catalog);

        assert_eq!(profile.get(Practical), 90);
        assert_eq!(profile.get(Analytical), 65);
        assert_eq!(profile.get(Social), 40);
        assert_eq!(profile.get(Creative), 0);
    }

    #[test]
    fn test_orphaned_attempts_are_skipped() {
        let attempts = [attempt("retired-game", 95)];
        let profile = build_profile(&attempts, &single_game_catalog());
        assert_eq!(profile, SkillProfile::empty());

        let mixed = [attempt("retired-game", 10), attempt("G1", 50)];
        let profile = build_profile(&mixed, &single_game_catalog());
        assert_eq!(profile.get(Creative), 50);
    }
}
