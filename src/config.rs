use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the JSON catalog snapshot
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of titles returned by the recommendation endpoint
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Build the feature matrix once at startup instead of on every request
    #[serde(default = "default_cache_feature_matrix")]
    pub cache_feature_matrix: bool,

    /// Minimum vote count before a title's rating is reported
    #[serde(default = "default_min_votes")]
    pub min_votes: u32,
}

fn default_catalog_path() -> String {
    "data/movies.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_recommendation_limit() -> usize {
    5
}

fn default_cache_feature_matrix() -> bool {
    true
}

fn default_min_votes() -> u32 {
    2000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.catalog_path, "data/movies.json");
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.recommendation_limit, 5);
        assert!(config.cache_feature_matrix);
        assert_eq!(config.min_votes, 2000);
    }

    #[test]
    fn test_overrides_from_env() {
        let vars = vec![
            ("CATALOG_PATH".to_string(), "/srv/catalog.json".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("RECOMMENDATION_LIMIT".to_string(), "10".to_string()),
            ("CACHE_FEATURE_MATRIX".to_string(), "false".to_string()),
        ];

        let config = Config::from_vars(vars).unwrap();
        assert_eq!(config.catalog_path, "/srv/catalog.json");
        assert_eq!(config.port, 8080);
        assert_eq!(config.recommendation_limit, 10);
        assert!(!config.cache_feature_matrix);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let vars = vec![("PORT".to_string(), "not-a-port".to_string())];
        assert!(Config::from_vars(vars).is_err());
    }
}
