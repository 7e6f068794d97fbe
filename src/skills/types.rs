use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::SkillCategory;

pub type SkillScore = u8;

/// Average score per skill category. Every category is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillProfile {
    scores: BTreeMap<SkillCategory, SkillScore>,
}

impl Default for SkillProfile {
    fn default() -> Self {
        Self::empty()
    }
}

impl SkillProfile {
    pub fn empty() -> Self {
        Self {
            scores: SkillCategory::ALL.into_iter().map(|c| (c, 0)).collect(),
        }
    }

    pub(crate) fn from_scores(scores: impl IntoIterator<Item = (SkillCategory, SkillScore)>) -> Self {
        let mut profile = Self::empty();
        for (category, score) in scores {
            profile.scores.insert(category, score);
        }
        profile
    }

    pub fn get(&self, category: SkillCategory) -> SkillScore {
        self.scores.get(&category).copied().unwrap_or(0)
    }

    /// Categories with their scores in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, SkillScore)> + '_ {
        self.scores.iter().map(|(&category, &score)| (category, score))
    }

    /// Highest-scoring category; the earliest category wins a tie.
    pub fn strongest(&self) -> (SkillCategory, SkillScore) {
        self.pick(|candidate, best| candidate > best)
    }

    /// Lowest-scoring category; the earliest category wins a tie.
    pub fn weakest(&self) -> (SkillCategory, SkillScore) {
        self.pick(|candidate, best| candidate < best)
    }

    fn pick(&self, beats: impl Fn(SkillScore, SkillScore) -> bool) -> (SkillCategory, SkillScore) {
        let [first, rest @ ..] = SkillCategory::ALL;
        rest.into_iter()
            .map(|category| (category, self.get(category)))
            .fold((first, self.get(first)), |best, current| {
                if beats(current.1, best.1) { current } else { best }
            })
    }

    /// The `n` best categories, highest first, canonical order among equals.
    pub fn top(&self, n: usize) -> Vec<(SkillCategory, SkillScore)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn is_blank(&self) -> bool {
        self.scores.values().all(|&score| score == 0)
    }
}

/// A skill label that stays open until the actor has played at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillAssessment {
    NotYetDetermined,
    Category(SkillCategory),
}

impl SkillAssessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillAssessment::NotYetDetermined => "not yet determined",
            SkillAssessment::Category(category) => category.as_str(),
        }
    }
}

impl fmt::Display for SkillAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SkillAssessment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SkillAssessment::NotYetDetermined => serializer.serialize_none(),
            SkillAssessment::Category(category) => category.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub dominant_category: SkillAssessment,
    pub weakest_category: SkillAssessment,
    pub recommended_game_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSkill {
    pub category: SkillCategory,
    pub score: SkillScore,
}

/// Dashboard summary of a profile: top skills and talent titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillReport {
    pub profile: SkillProfile,
    pub top_skills: Vec<RankedSkill>,
    pub career_title: String,
    pub talent_type: String,
}
