use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;

use crate::{models::Movie, services::catalog::Catalog};

/// Each successful load gets a fresh generation number
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Source of the catalog snapshot
///
/// The service loads the catalog exactly once at startup; loaders only need to
/// produce a complete, consistent table.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogLoader: Send + Sync {
    async fn load(&self) -> anyhow::Result<Catalog>;

    /// Loader name for logging
    fn name(&self) -> &'static str;
}

/// Reads a JSON array of movie records from disk
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parses a catalog from JSON text
    pub fn parse(json: &str) -> anyhow::Result<Catalog> {
        let movies: Vec<Movie> =
            serde_json::from_str(json).context("Catalog is not a JSON array of movies")?;
        Ok(Catalog::new(movies, next_generation()))
    }
}

#[async_trait::async_trait]
impl CatalogLoader for JsonFileLoader {
    async fn load(&self) -> anyhow::Result<Catalog> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog from {}", self.path.display()))?;

        let catalog = Self::parse(&json)?;

        tracing::info!(
            path = %self.path.display(),
            movies = catalog.len(),
            generation = catalog.generation(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    const CATALOG_JSON: &str = r#"[
        {
            "id": 862,
            "title": "Toy Story",
            "release_date": "1995-10-30",
            "release_year": 1995,
            "vote_count": 5415,
            "vote_average": 7.7,
            "features": "animation comedy family toy jealousy"
        },
        {
            "id": 8844,
            "title": "Jumanji",
            "release_date": "1995-12-15",
            "release_year": 1995,
            "features": "adventure fantasy board game"
        }
    ]"#;

    #[test]
    fn test_parse_keeps_file_order() {
        let catalog = assert_ok!(JsonFileLoader::parse(CATALOG_JSON));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.movies()[0].title, "Toy Story");
        assert_eq!(catalog.movies()[1].title, "Jumanji");
    }

    #[test]
    fn test_parse_assigns_increasing_generations() {
        let first = JsonFileLoader::parse(CATALOG_JSON).unwrap();
        let second = JsonFileLoader::parse(CATALOG_JSON).unwrap();
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert_err!(JsonFileLoader::parse(r#"{"title": "Toy Story"}"#));
        assert_err!(JsonFileLoader::parse("not json"));
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let loader = JsonFileLoader::new("/nonexistent/catalog.json");
        let err = loader.load().await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, CATALOG_JSON).await.unwrap();

        let loader = JsonFileLoader::new(&path);
        let catalog = loader.load().await.unwrap();
        assert_eq!(catalog.len(), 2);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
