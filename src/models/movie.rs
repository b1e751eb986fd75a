use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the movie catalog snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub release_date: NaiveDate,
    pub release_year: i32,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub revenue: f64,
    /// Revenue over budget, 0 when the budget is unknown
    #[serde(rename = "return", default)]
    pub return_ratio: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    /// Genres, keywords, cast, crew and overview collapsed into one blob
    #[serde(default)]
    pub features: String,
}

/// Credit a person can hold on a movie
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Actor,
    Director,
}

impl Movie {
    /// People credited on this movie under the given role
    pub fn credits(&self, role: Role) -> &[String] {
        match role {
            Role::Actor => &self.cast,
            Role::Director => &self.directors,
        }
    }
}
