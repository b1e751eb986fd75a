use chrono::NaiveDate;
use serde::Serialize;

mod corpus;
mod movie;

pub use corpus::{Corpus, FeatureRecord};
pub use movie::{Movie, Role};

// ============================================================================
// Response Types
// ============================================================================

/// Ranked titles similar to the requested one
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationResponse {
    #[serde(rename = "Películas recomendadas")]
    pub recommended: Vec<String>,
}

/// Number of releases in a given month
#[derive(Debug, Serialize)]
pub struct MonthCountResponse {
    pub mes: String,
    pub cantidad: usize,
}

/// Number of releases on a given weekday
#[derive(Debug, Serialize)]
pub struct WeekdayCountResponse {
    pub dia: String,
    pub cantidad: usize,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub titulo: String,
    pub anio: i32,
    pub popularidad: f64,
}

#[derive(Debug, Serialize)]
pub struct VotesResponse {
    pub titulo: String,
    pub anio: i32,
    pub votos: u32,
    pub promedio: f64,
}

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub actor: String,
    pub cantidad: usize,
    pub retorno_total: f64,
    pub retorno_promedio: f64,
}

#[derive(Debug, Serialize)]
pub struct DirectorResponse {
    pub director: String,
    pub retorno_total: f64,
    pub peliculas: Vec<DirectedMovie>,
}

/// Per-movie financials listed under a director
#[derive(Debug, Serialize)]
pub struct DirectedMovie {
    pub titulo: String,
    pub fecha: NaiveDate,
    pub retorno: f64,
    pub presupuesto: f64,
    /// Revenue minus budget
    pub ganancia: f64,
}

impl From<&Movie> for DirectedMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            titulo: movie.title.clone(),
            fecha: movie.release_date,
            retorno: movie.return_ratio,
            presupuesto: movie.budget,
            ganancia: movie.revenue - movie.budget,
        }
    }
}
