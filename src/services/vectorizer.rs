//! TF-IDF vectorization of the feature corpus.
//!
//! Each document becomes one L2-normalized sparse row. Term weights are raw
//! term counts multiplied by a smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`, so terms present in every document still keep
//! a non-zero weight.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{AppError, AppResult};

/// Common English words dropped before building the vocabulary
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "be", "became", "because", "become", "becomes", "becoming", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
    "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down",
    "during", "each", "either", "else", "elsewhere", "enough", "etc", "even", "ever", "every",
    "everyone", "everything", "everywhere", "except", "few", "for", "former", "formerly", "from",
    "further", "had", "has", "have", "having", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hers", "herself", "him", "himself", "his", "how", "however", "i", "ie",
    "if", "in", "indeed", "into", "is", "it", "its", "itself", "just", "latter", "least", "less",
    "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most", "mostly",
    "much", "must", "my", "myself", "namely", "neither", "never", "nevertheless", "next", "no",
    "nobody", "none", "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on",
    "once", "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves",
    "out", "over", "own", "per", "perhaps", "rather", "same", "seem", "seemed", "seeming",
    "seems", "several", "she", "should", "since", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "these", "they", "this", "those", "though", "through", "throughout",
    "thus", "to", "together", "too", "toward", "towards", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever",
    "where", "whereas", "whereby", "wherein", "whether", "which", "while", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
    "your", "yours", "yourself", "yourselves",
];

/// Tokens shorter than this (in characters) are ignored
const MIN_TOKEN_LENGTH: usize = 2;

/// Sparse row: `(term index, weight)` pairs sorted by term index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from entries already sorted by term index
    pub fn from_sorted(entries: Vec<(usize, f64)>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    /// Dot product via a merge over both sorted index lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}

/// Row-per-document TF-IDF matrix
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    rows: Vec<SparseVector>,
    vocabulary: BTreeMap<String, usize>,
}

impl FeatureMatrix {
    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index of a vocabulary term
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Builds TF-IDF feature matrices with a fixed stopword policy
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    stop_words: HashSet<&'static str>,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS)
    }
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(stop_words: &[&'static str]) -> Self {
        Self {
            stop_words: stop_words.iter().copied().collect(),
        }
    }

    /// Splits text on Unicode word boundaries, lowercases, and drops
    /// stopwords and tokens shorter than two characters
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(str::to_lowercase)
            .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
            .filter(|token| !self.stop_words.contains(token.as_str()))
            .collect()
    }

    /// Vectorizes every document, one row per document in input order.
    ///
    /// Empty documents produce all-zero rows. Fails with
    /// [`AppError::EmptyCorpus`] when there are no documents at all.
    pub fn build<'a, I>(&self, documents: I) -> AppResult<FeatureMatrix>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenized: Vec<Vec<String>> = documents
            .into_iter()
            .map(|doc| self.tokenize(doc))
            .collect();

        if tokenized.is_empty() {
            return Err(AppError::EmptyCorpus);
        }

        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        let mut doc_frequency = vec![0usize; vocabulary.len()];
        let term_counts: Vec<BTreeMap<usize, usize>> = tokenized
            .iter()
            .map(|tokens| {
                let mut counts = BTreeMap::new();
                for token in tokens {
                    if let Some(&index) = vocabulary.get(token) {
                        *counts.entry(index).or_insert(0) += 1;
                    }
                }
                for &index in counts.keys() {
                    doc_frequency[index] += 1;
                }
                counts
            })
            .collect();

        let n = tokenized.len() as f64;
        let idf: Vec<f64> = doc_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = term_counts
            .into_iter()
            .map(|counts| {
                let entries = counts
                    .into_iter()
                    .map(|(index, count)| (index, count as f64 * idf[index]))
                    .collect();
                let mut row = SparseVector::from_sorted(entries);
                row.normalize();
                row
            })
            .collect();

        tracing::debug!(
            documents = tokenized.len(),
            vocabulary = vocabulary.len(),
            "Feature matrix built"
        );

        Ok(FeatureMatrix { rows, vocabulary })
    }
}
