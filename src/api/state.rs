use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{Catalog, CatalogLoader, Recommender, RecommenderConfig},
};

/// Shared application state
///
/// Everything here is read-only after construction, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<Recommender>,
    pub min_votes: u32,
}

impl AppState {
    /// Builds state from a loaded catalog
    pub fn new(
        catalog: Catalog,
        recommender_config: RecommenderConfig,
        min_votes: u32,
    ) -> AppResult<Self> {
        let corpus = Arc::new(catalog.corpus());
        let recommender = Recommender::new(corpus, recommender_config)?;

        Ok(Self {
            catalog: Arc::new(catalog),
            recommender: Arc::new(recommender),
            min_votes,
        })
    }

    /// Builds state using the limits from `config`
    pub fn from_config(catalog: Catalog, config: &Config) -> AppResult<Self> {
        let recommender_config = RecommenderConfig {
            limit: config.recommendation_limit,
            cache_matrix: config.cache_feature_matrix,
        };
        Self::new(catalog, recommender_config, config.min_votes)
    }

    /// Loads the catalog once through `loader` and builds state from it
    pub async fn load(loader: &dyn CatalogLoader, config: &Config) -> anyhow::Result<Self> {
        tracing::info!(loader = loader.name(), "Loading catalog");
        let catalog = loader.load().await?;
        Ok(Self::from_config(catalog, config)?)
    }
}
