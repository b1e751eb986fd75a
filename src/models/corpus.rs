use super::Movie;

/// Feature text of a single movie, as consumed by the recommender
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub id: u64,
    pub title: String,
    pub features: String,
}

/// Read-only sequence of feature records in catalog order.
///
/// Row `i` of any feature matrix built from this corpus corresponds to
/// the `i`-th record. The generation identifies the snapshot the corpus came from
/// so derived data can be tied to it.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<FeatureRecord>,
    generation: u64,
}

impl Corpus {
    pub fn new(records: Vec<FeatureRecord>, generation: u64) -> Self {
        Self {
            records,
            generation,
        }
    }

    /// Builds a corpus from (title, features) pairs, numbering ids by position
    pub fn from_pairs<T, F>(pairs: impl IntoIterator<Item = (T, F)>) -> Self
    where
        T: Into<String>,
        F: Into<String>,
    {
        let records = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (title, features))| FeatureRecord {
                id: i as u64,
                title: title.into(),
                features: features.into(),
            })
            .collect();

        Self::new(records, 0)
    }

    pub fn from_movies(movies: &[Movie], generation: u64) -> Self {
        let records = movies
            .iter()
            .map(|movie| FeatureRecord {
                id: movie.id,
                title: movie.title.clone(),
                features: movie.features.clone(),
            })
            .collect();

        Self::new(records, generation)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Feature text column, in row order
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.features.as_str())
    }

    /// Rows of every record whose title equals `title` exactly, ascending.
    ///
    /// Case-sensitive. The first row is the canonical one for a duplicated title.
    pub fn positions_of(&self, title: &str) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.title == title)
            .map(|(row, _)| row)
            .collect()
    }

    pub fn record_at(&self, row: usize) -> Option<&FeatureRecord> {
        self.records.get(row)
    }

    pub fn title_at(&self, row: usize) -> Option<&str> {
        self.records.get(row).map(|r| r.title.as_str())
    }
}
