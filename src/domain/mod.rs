pub mod attempt;
pub mod catalog;
pub mod category;

pub use attempt::{AttemptRecord, PendingAttempt};
pub use catalog::{CategoryWeights, GameCatalog, GameCatalogEntry, RawCatalogEntry};
pub use category::SkillCategory;
