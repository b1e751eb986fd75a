pub mod catalog;
pub mod loader;
pub mod locale;
pub mod ranker;
pub mod recommendations;
pub mod similarity;
pub mod vectorizer;

pub use catalog::{Catalog, PersonSummary};
pub use loader::{CatalogLoader, JsonFileLoader};
pub use recommendations::{Recommender, RecommenderConfig};
