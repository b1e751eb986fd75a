use std::sync::Arc;
use std::time::Instant;

use crate::{
    error::{AppError, AppResult},
    models::Corpus,
    services::{
        ranker::rank_excluding,
        similarity::similarity,
        vectorizer::{FeatureMatrix, TfIdfVectorizer},
    },
};

/// Tuning knobs for the content-based recommender
#[derive(Debug, Clone, Copy)]
pub struct RecommenderConfig {
    /// Maximum number of titles returned per request
    pub limit: usize,
    /// Keep one feature matrix per corpus generation instead of rebuilding it
    /// on every request
    pub cache_matrix: bool,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            cache_matrix: true,
        }
    }
}

/// Feature matrix tied to the corpus generation it was built from
struct CachedMatrix {
    generation: u64,
    matrix: Arc<FeatureMatrix>,
}

/// Content-based recommender over an immutable feature corpus.
///
/// Request flow: exact title lookup, vectorize (or reuse the cached matrix),
/// score the title's row against every row, then rank excluding the title
/// itself. All steps are synchronous CPU work with no I/O.
pub struct Recommender {
    corpus: Arc<Corpus>,
    vectorizer: TfIdfVectorizer,
    config: RecommenderConfig,
    cached: Option<CachedMatrix>,
}

impl Recommender {
    /// Creates a recommender, building the cached matrix up front when enabled.
    ///
    /// Fails with [`AppError::EmptyCorpus`] if the corpus has no records.
    pub fn new(corpus: Arc<Corpus>, config: RecommenderConfig) -> AppResult<Self> {
        if corpus.is_empty() {
            return Err(AppError::EmptyCorpus);
        }

        let vectorizer = TfIdfVectorizer::new();

        let cached = if config.cache_matrix {
            let start = Instant::now();
            let matrix = vectorizer.build(corpus.features())?;
            tracing::info!(
                generation = corpus.generation(),
                rows = matrix.len(),
                vocabulary = matrix.vocabulary_size(),
                build_time_ms = start.elapsed().as_millis(),
                "Feature matrix cached"
            );
            Some(CachedMatrix {
                generation: corpus.generation(),
                matrix: Arc::new(matrix),
            })
        } else {
            None
        };

        Ok(Self {
            corpus,
            vectorizer,
            config,
            cached,
        })
    }

    /// Titles most similar to `title`, best first.
    ///
    /// The lookup is an exact, case-sensitive match; when several records
    /// share the title the first one in corpus order is the query and every
    /// record with that title is left out of the results. Returns
    /// [`AppError::TitleNotFound`] carrying the requested title otherwise.
    pub fn recommend(&self, title: &str) -> AppResult<Vec<String>> {
        let start = Instant::now();

        let same_title = self.corpus.positions_of(title);
        let row = *same_title
            .first()
            .ok_or_else(|| AppError::TitleNotFound(title.to_string()))?;
        let movie_id = self.corpus.record_at(row).map(|r| r.id);

        let matrix = self.matrix()?;

        let query = matrix
            .row(row)
            .ok_or_else(|| AppError::Internal(format!("Feature matrix has no row {}", row)))?;

        let scores = similarity(query, &matrix);
        let ranked = rank_excluding(&scores, &same_title, self.config.limit);

        let titles: Vec<String> = ranked
            .into_iter()
            .filter_map(|index| self.corpus.title_at(index))
            .map(str::to_string)
            .collect();

        tracing::info!(
            title = %title,
            movie_id = ?movie_id,
            row = row,
            limit = self.config.limit,
            results = titles.len(),
            processing_time_ms = start.elapsed().as_millis(),
            "Recommendations computed"
        );

        Ok(titles)
    }

    /// Cached matrix for the current corpus generation, or a freshly built one
    fn matrix(&self) -> AppResult<Arc<FeatureMatrix>> {
        match &self.cached {
            Some(cached) if cached.generation == self.corpus.generation() => {
                Ok(Arc::clone(&cached.matrix))
            }
            _ => {
                tracing::debug!(generation = self.corpus.generation(), "Vectorizing corpus");
                Ok(Arc::new(self.vectorizer.build(self.corpus.features())?))
            }
        }
    }
}
