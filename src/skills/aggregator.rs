use log::debug;
use std::sync::Arc;

use super::aggregation::build_profile;
use super::recommendation::recommend;
use super::types::{RankedSkill, Recommendation, SkillProfile, SkillReport};
use crate::config::settings::RecommendationSettings;
use crate::domain::GameCatalog;
use crate::errors::PipelineError;
use crate::recorder::AttemptRecorder;

const TOP_SKILLS: usize = 3;

/// Turns an actor's attempt log into a skill profile and a next-game
/// recommendation. Everything is recomputed on each call.
pub struct SkillAggregator {
    recorder: Arc<AttemptRecorder>,
    catalog: Arc<GameCatalog>,
    settings: RecommendationSettings,
}

impl SkillAggregator {
    pub fn new(
        recorder: Arc<AttemptRecorder>,
        catalog: Arc<GameCatalog>,
        settings: RecommendationSettings,
    ) -> Self {
        Self {
            recorder,
            catalog,
            settings,
        }
    }

    pub fn compute_profile(&self, actor_id: &str) -> Result<SkillProfile, PipelineError> {
        let attempts = self.recorder.query_by_actor(actor_id)?;
        debug!("Aggregating {} attempts for actor {}", attempts.len(), actor_id);
        Ok(build_profile(&attempts, &self.catalog))
    }

    pub fn compute_recommendation(&self, actor_id: &str) -> Result<Recommendation, PipelineError> {
        let attempts = self.recorder.query_by_actor(actor_id)?;
        let profile = build_profile(&attempts, &self.catalog);
        Ok(recommend(
            &profile,
            !attempts.is_empty(),
            &self.catalog,
            &self.settings,
        ))
    }

    pub fn compute_report(&self, actor_id: &str) -> Result<SkillReport, PipelineError> {
        let profile = self.compute_profile(actor_id)?;
        Ok(build_report(profile))
    }
}

fn build_report(profile: SkillProfile) -> SkillReport {
    let (strongest, score) = profile.strongest();
    let (career_title, talent_type) = if score > 0 {
        (format!("{strongest} Specialist"), format!("{strongest} Learner"))
    } else {
        ("Explore Games".to_string(), "Undiscovered".to_string())
    };

    let top_skills = profile
        .top(TOP_SKILLS)
        .into_iter()
        .map(|(category, score)| RankedSkill { category, score })
        .collect();

    SkillReport {
        profile,
        top_skills,
        career_title,
        talent_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use crate::domain::{GameCatalogEntry, SkillCategory::*};
    use crate::skills::SkillAssessment;
    use crate::store::{AttemptStore, InMemoryAttemptStore};

    struct Fixture {
        recorder: Arc<AttemptRecorder>,
        aggregator: SkillAggregator,
    }

    fn fixture_with(catalog: GameCatalog) -> Fixture {
        let catalog = Arc::new(catalog);
        let store: Arc<dyn AttemptStore> = Arc::new(InMemoryAttemptStore::new());
        let recorder = Arc::new(AttemptRecorder::new(store, Arc::clone(&catalog)));
        let aggregator = SkillAggregator::new(
            Arc::clone(&recorder),
            catalog,
            RecommendationSettings::default(),
        );
        Fixture {
            recorder,
            aggregator,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(default_catalog().unwrap())
    }

    #[test]
    fn test_fresh_actor() {
        let f = fixture();

        let profile = f.aggregator.compute_profile("new").unwrap();
        assert_eq!(profile, SkillProfile::empty());

        let recommendation = f.aggregator.compute_recommendation("new").unwrap();
        assert_eq!(recommendation.recommended_game_id, "pattern-weaver");
        assert_eq!(recommendation.weakest_category, SkillAssessment::NotYetDetermined);

        let report = f.aggregator.compute_report("new").unwrap();
        assert_eq!(report.career_title, "Explore Games");
        assert_eq!(report.talent_type, "Undiscovered");
    }

    #[test]
    fn test_profile_is_idempotent() {
        let f = fixture();
        f.recorder.record("ada", "pattern-weaver", 80, 30).unwrap();
        f.recorder.record("ada", "desktop-ranger", 55, 30).unwrap();

        let first = f.aggregator.compute_profile("ada").unwrap();
        let second = f.aggregator.compute_profile("ada").unwrap();
        assert_eq!(first, second);

        let first = f.aggregator.compute_recommendation("ada").unwrap();
        let second = f.aggregator.compute_recommendation("ada").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_profile_reflects_new_records() {
        let f = fixture();
        f.recorder.record("ada", "recipe-builder", 40, 30).unwrap();
        assert_eq!(f.aggregator.compute_profile("ada").unwrap().get(Social), 40);

        f.recorder.record("ada", "recipe-builder", 60, 30).unwrap();
        assert_eq!(f.aggregator.compute_profile("ada").unwrap().get(Social), 50);
    }

    #[test]
    fn test_other_actors_do_not_leak() {
        let f = fixture();
        f.recorder.record("bob", "color-sorter", 100, 30).unwrap();

        assert_eq!(f.aggregator.compute_profile("ada").unwrap(), SkillProfile::empty());
    }

    #[test]
    fn test_recommendation_after_play() {
        let f = fixture();
        f.recorder.record("ada", "pattern-weaver", 90, 30).unwrap();
        f.recorder.record("ada", "3d-gift-wrapper", 70, 30).unwrap();

        // Practical 80, Creative 90, Technical 70, Analytical 0, Social 0
        let recommendation = f.aggregator.compute_recommendation("ada").unwrap();
        assert_eq!(recommendation.dominant_category, SkillAssessment::Category(Creative));
        assert_eq!(recommendation.weakest_category, SkillAssessment::Category(Analytical));
        assert_eq!(recommendation.recommended_game_id, "color-sorter");
    }

    #[test]
    fn test_attempts_on_removed_game_count_for_nothing() {
        let full = fixture();
        full.recorder.record("ada", "desktop-ranger", 88, 30).unwrap();

        // Same log, read through a catalog that no longer lists desktop-ranger.
        let reduced: Vec<GameCatalogEntry> = default_catalog()
            .unwrap()
            .iter()
            .filter(|g| g.game_id != "desktop-ranger")
            .cloned()
            .collect();
        let aggregator = SkillAggregator::new(
            Arc::clone(&full.recorder),
            Arc::new(GameCatalog::new(reduced).unwrap()),
            RecommendationSettings::default(),
        );

        let profile = aggregator.compute_profile("ada").unwrap();
        assert_eq!(profile, SkillProfile::empty());

        let recommendation = aggregator.compute_recommendation("ada").unwrap();
        assert_eq!(recommendation.weakest_category, SkillAssessment::Category(Practical));
    }

    #[test]
    fn test_report_titles_and_top_skills() {
        let f = fixture();
        f.recorder.record("ada", "desktop-ranger", 90, 30).unwrap();
        f.recorder.record("ada", "color-sorter", 60, 30).unwrap();

        let report = f.aggregator.compute_report("ada").unwrap();

        assert_eq!(report.career_title, "Technical Specialist");
        assert_eq!(report.talent_type, "Technical Learner");
        let top: Vec<_> = report.top_skills.iter().map(|s| (s.category, s.score)).collect();
        assert_eq!(top, vec![(Technical, 90), (Social, 90), (Practical, 60)]);
    }
}
