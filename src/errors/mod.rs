use thiserror::Error;

/// Failures surfaced by the attempt recorder and the skill aggregator.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("score {score} is outside the accepted range 0-100")]
    InvalidScore { score: i64 },

    #[error("game '{game_id}' is not in the catalog")]
    UnknownGame { game_id: String },

    /// The attempt store failed to accept a write or serve a read.
    #[error("attempt store unavailable: {0:#}")]
    StoreUnavailable(anyhow::Error),
}

impl PipelineError {
    pub fn store(err: anyhow::Error) -> Self {
        Self::StoreUnavailable(err)
    }
}

/// Problems found while loading the game catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("game catalog is empty")]
    Empty,

    #[error("duplicate game id in catalog: {0}")]
    DuplicateGame(String),

    #[error("game '{game_id}' has weight {weight} for {category}, expected a value in (0, 1]")]
    InvalidWeight {
        game_id: String,
        category: String,
        weight: f64,
    },

    #[error("game '{game_id}' lists skill category {category} more than once")]
    DuplicateCategory { game_id: String, category: String },

    #[error("game '{0}' lists no known skill categories")]
    NoCategories(String),

    #[error("failed to read catalog file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog")]
    Parse(#[from] serde_json::Error),
}
