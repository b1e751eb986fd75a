use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use cinema_recs_api::{
    api::{create_router, AppState},
    services::{JsonFileLoader, RecommenderConfig},
};

fn catalog_json() -> Value {
    json!([
        {
            "id": 1,
            "title": "Alpha",
            "release_date": "1995-12-15",
            "release_year": 1995,
            "budget": 60000000,
            "revenue": 187436818,
            "return": 3.12,
            "popularity": 17.9,
            "vote_average": 7.7,
            "vote_count": 1886,
            "cast": ["Al Pacino", "Robert De Niro"],
            "directors": ["Michael Mann"],
            "features": "space war robot"
        },
        {
            "id": 2,
            "title": "Beta",
            "release_date": "1972-03-14",
            "release_year": 1972,
            "budget": 6000000,
            "revenue": 245066411,
            "return": 40.84,
            "popularity": 41.1,
            "vote_average": 8.5,
            "vote_count": 6024,
            "cast": ["Al Pacino", "Marlon Brando"],
            "directors": ["Francis Ford Coppola"],
            "features": "space war robot"
        },
        {
            "id": 3,
            "title": "Gamma",
            "release_date": "2006-03-17",
            "release_year": 2006,
            "return": 8.5,
            "cast": ["Penélope Cruz"],
            "directors": ["Pedro Almodóvar"],
            "features": "romance drama"
        }
    ])
}

fn create_test_server_with(config: RecommenderConfig) -> TestServer {
    let catalog = JsonFileLoader::parse(&catalog_json().to_string()).unwrap();
    let state = AppState::new(catalog, config, 2000).unwrap();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn create_test_server() -> TestServer {
    create_test_server_with(RecommenderConfig::default())
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_recommendation_ranks_shared_terms_first() {
    let server = create_test_server();

    let response = server.get("/recomendacion_pelicula/Alpha").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body, json!({ "Películas recomendadas": ["Beta", "Gamma"] }));
}

#[tokio::test]
async fn test_recommendation_without_matrix_cache() {
    let server = create_test_server_with(RecommenderConfig {
        limit: 5,
        cache_matrix: false,
    });

    let response = server.get("/recomendacion_pelicula/Gamma").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["Películas recomendadas"], json!(["Alpha", "Beta"]));
}

#[tokio::test]
async fn test_recommendation_unknown_title_is_404() {
    let server = create_test_server();

    let response = server.get("/recomendacion_pelicula/Nonexistent").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Nonexistent"));
}

#[tokio::test]
async fn test_recommendation_lookup_is_case_sensitive() {
    let server = create_test_server();

    // Catalog lookups fold case, the recommender does not
    server
        .get("/score_titulo/alpha")
        .await
        .assert_status_ok();
    server
        .get("/recomendacion_pelicula/alpha")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommendation_is_deterministic() {
    let server = create_test_server();

    let first: Value = server.get("/recomendacion_pelicula/Beta").await.json();
    let second: Value = server.get("/recomendacion_pelicula/Beta").await.json();
    assert_eq!(first, second);
    assert_eq!(first["Películas recomendadas"], json!(["Alpha", "Gamma"]));
}

#[tokio::test]
async fn test_count_by_month() {
    let server = create_test_server();

    let response = server.get("/cantidad_filmaciones_mes/Marzo").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["cantidad"], 2);

    server
        .get("/cantidad_filmaciones_mes/march")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_count_by_weekday() {
    let server = create_test_server();

    let response = server.get("/cantidad_filmaciones_dia/viernes").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["cantidad"], 2);

    let response = server.get("/cantidad_filmaciones_dia/mi%C3%A9rcoles").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["cantidad"], 0);
}

#[tokio::test]
async fn test_score_by_title() {
    let server = create_test_server();

    let response = server.get("/score_titulo/BETA").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["titulo"], "Beta");
    assert_eq!(body["anio"], 1972);
    assert!((body["popularidad"].as_f64().unwrap() - 41.1).abs() < 1e-9);

    server
        .get("/score_titulo/Delta")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_votes_require_minimum() {
    let server = create_test_server();

    let response = server.get("/votos_titulo/Beta").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["votos"], 6024);
    assert_eq!(body["promedio"], 8.5);

    server
        .get("/votos_titulo/Alpha")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_actor_summary() {
    let server = create_test_server();

    let response = server.get("/get_actor/al%20pacino").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["cantidad"], 2);
    assert!((body["retorno_total"].as_f64().unwrap() - 43.96).abs() < 1e-9);

    server
        .get("/get_actor/Nobody")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_director_summary() {
    let server = create_test_server();

    let response = server.get("/get_director/Pedro%20Almodovar").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["retorno_total"], 8.5);
    assert_eq!(body["peliculas"][0]["titulo"], "Gamma");
    assert_eq!(body["peliculas"][0]["fecha"], "2006-03-17");

    let response = server.get("/get_director/Francis%20Ford%20Coppola").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["peliculas"][0]["presupuesto"], 6000000.0);
    assert_eq!(body["peliculas"][0]["ganancia"], 239066411.0);
}
