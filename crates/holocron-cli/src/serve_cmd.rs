use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use holocron_core::planet::{self, NewPlanet, PlanetError};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }
}

impl From<PlanetError> for AppError {
    fn from(err: PlanetError) -> Self {
        let status = match &err {
            PlanetError::EmptyField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlanetError::DuplicateName(_) => StatusCode::CONFLICT,
            PlanetError::NotFound(_) => StatusCode::NOT_FOUND,
            PlanetError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "request failed");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreatePlanetRequest {
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(pool: PgPool) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/planets", get(list_planets).post(create_planet))
        .route("/planets/{id}", get(get_planet).delete(delete_planet))
        .route("/planets/name/{name}", get(get_planet_by_name))
        .layer(CorsLayer::permissive())
        .with_state(pool)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(pool: PgPool, bind: &str, port: u16) -> Result<()> {
    let app = build_router(pool);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("holocron serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("holocron serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index(State(pool): State<PgPool>) -> Result<axum::response::Response, AppError> {
    let planets = planet::list_planets(&pool, None, None).await?;

    let rows = if planets.is_empty() {
        "<tr><td colspan=\"4\">No planets catalogued.</td></tr>".to_string()
    } else {
        planets
            .iter()
            .map(|p| {
                format!(
                    "<tr><td><a href=\"/planets/{id}\">{name}</a></td><td>{climate}</td><td>{terrain}</td><td>{id}</td></tr>",
                    id = p.id,
                    name = p.name,
                    climate = p.climate,
                    terrain = p.terrain,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let html = format!(
        "<!DOCTYPE html>\
<html><head><title>holocron</title></head><body>\
<h1>holocron</h1>\
<p><a href=\"/planets\">/planets</a></p>\
<table><tr><th>Planet</th><th>Climate</th><th>Terrain</th><th>ID</th></tr>{rows}</table>\
</body></html>"
    );

    Ok(Html(html).into_response())
}

async fn create_planet(
    State(pool): State<PgPool>,
    Json(body): Json<CreatePlanetRequest>,
) -> Result<axum::response::Response, AppError> {
    let created = planet::create_planet(
        &pool,
        &NewPlanet {
            name: &body.name,
            climate: &body.climate,
            terrain: &body.terrain,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

async fn list_planets(
    State(pool): State<PgPool>,
    Query(params): Query<ListParams>,
) -> Result<axum::response::Response, AppError> {
    let planets =
        planet::list_planets(&pool, params.climate.as_deref(), params.terrain.as_deref()).await?;

    Ok(Json(planets).into_response())
}

async fn get_planet(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<axum::response::Response, AppError> {
    let found = planet::get_planet(&pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("planet {id} not found")))?;

    Ok(Json(found).into_response())
}

async fn get_planet_by_name(
    State(pool): State<PgPool>,
    Path(name): Path<String>,
) -> Result<axum::response::Response, AppError> {
    let found = planet::get_planet_by_name(&pool, &name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("planet {name:?} not found")))?;

    Ok(Json(found).into_response())
}

async fn delete_planet(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<axum::response::Response, AppError> {
    planet::remove_planet(&pool, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
