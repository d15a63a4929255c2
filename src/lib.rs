pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod resolver;
pub mod view;

use catalog::Catalog;
use config::Config;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: Catalog::builtin(),
        }
    }
}
