pub mod aggregation;
mod aggregator;
pub mod recommendation;
pub mod types;

pub use aggregation::build_profile;
pub use aggregator::SkillAggregator;
pub use recommendation::{find_training_game, recommend};
pub use types::{RankedSkill, Recommendation, SkillAssessment, SkillProfile, SkillReport, SkillScore};
