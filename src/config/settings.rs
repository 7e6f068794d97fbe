use std::path::PathBuf;

const DEFAULT_DATABASE_PATH: &str = "skill_radar.db";

#[derive(Debug, Clone)]
pub struct RecommendationSettings {
    /// Minimum weight a game must carry for the weakest category to be
    /// recommended for it.
    pub weight_threshold: f64,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            weight_threshold: 0.4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

impl StorageSettings {
    pub fn from_env() -> Self {
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        Self { database_path }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogSettings {
    /// JSON catalog to load instead of the built-in game list.
    pub path: Option<PathBuf>,
}

impl CatalogSettings {
    pub fn from_env() -> Self {
        let path = std::env::var_os("SKILL_CATALOG_PATH").map(PathBuf::from);
        Self { path }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub recommendation: RecommendationSettings,
    pub storage: StorageSettings,
    pub catalog: CatalogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            recommendation: RecommendationSettings::default(),
            storage: StorageSettings::default(),
            catalog: CatalogSettings::default(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            recommendation: RecommendationSettings::default(),
            storage: StorageSettings::from_env(),
            catalog: CatalogSettings::from_env(),
        }
    }
}
