use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::config::{self, AppConfig};
use crate::domain::GameCatalog;
use crate::recorder::AttemptRecorder;
use crate::skills::SkillAggregator;
use crate::store::{AttemptStore, SqliteAttemptStore};

/// The recorder and aggregator wired to one store and one catalog.
pub struct Pipeline {
    pub catalog: Arc<GameCatalog>,
    pub recorder: Arc<AttemptRecorder>,
    pub aggregator: SkillAggregator,
}

impl Pipeline {
    /// Load the catalog and open the SQLite store named in `config`.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let catalog = config::load_catalog(&config.catalog)?;
        let store = SqliteAttemptStore::open(&config.storage.database_path)?;
        info!("Pipeline ready with {} games", catalog.len());
        Ok(Self::assemble(Arc::new(store), catalog, config))
    }

    pub fn assemble(
        store: Arc<dyn AttemptStore>,
        catalog: Arc<GameCatalog>,
        config: &AppConfig,
    ) -> Self {
        let recorder = Arc::new(AttemptRecorder::new(store, Arc::clone(&catalog)));
        let aggregator = SkillAggregator::new(
            Arc::clone(&recorder),
            Arc::clone(&catalog),
            config.recommendation.clone(),
        );

        Self {
            catalog,
            recorder,
            aggregator,
        }
    }
}
