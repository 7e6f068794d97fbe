pub mod games;
pub mod settings;

pub use games::{default_catalog, load_catalog};
pub use settings::AppConfig;
