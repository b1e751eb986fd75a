use chrono::{Datelike, Weekday};

use crate::{
    error::{AppError, AppResult},
    models::{Corpus, Movie, Role},
    services::locale::fold,
};

/// Immutable in-memory movie table, loaded once per process
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    generation: u64,
}

/// Credits and financials aggregated for one person
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSummary<'a> {
    pub count: usize,
    pub total_return: f64,
    pub average_return: f64,
    pub movies: Vec<&'a Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, generation: u64) -> Self {
        Self { movies, generation }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Feature corpus for the recommender, in catalog order
    pub fn corpus(&self) -> Corpus {
        Corpus::from_movies(&self.movies, self.generation)
    }

    /// Number of movies released in `month` (1-12) of any year
    pub fn count_by_month(&self, month: u32) -> usize {
        self.movies
            .iter()
            .filter(|m| m.release_date.month() == month)
            .count()
    }

    /// Number of movies released on `weekday`
    pub fn count_by_weekday(&self, weekday: Weekday) -> usize {
        self.movies
            .iter()
            .filter(|m| m.release_date.weekday() == weekday)
            .count()
    }

    /// First movie whose title matches ignoring case and accents
    pub fn lookup_by_title(&self, title: &str) -> Option<&Movie> {
        let wanted = fold(title);
        self.movies.iter().find(|m| fold(&m.title) == wanted)
    }

    /// Aggregates every movie where `name` holds `role`.
    ///
    /// Names match ignoring case and accents. Fails with `NotFound` when the
    /// person has no credits.
    pub fn aggregate_by_person(&self, name: &str, role: Role) -> AppResult<PersonSummary<'_>> {
        let wanted = fold(name);
        let movies: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|m| m.credits(role).iter().any(|person| fold(person) == wanted))
            .collect();

        if movies.is_empty() {
            return Err(AppError::NotFound(format!(
                "No movies credit {} as {}",
                name,
                match role {
                    Role::Actor => "actor",
                    Role::Director => "director",
                }
            )));
        }

        let count = movies.len();
        let total_return: f64 = movies.iter().map(|m| m.return_ratio).sum();

        Ok(PersonSummary {
            count,
            total_return,
            average_return: total_return / count as f64,
            movies,
        })
    }
}
