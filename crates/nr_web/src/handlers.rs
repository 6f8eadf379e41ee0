use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Json,
};
use nr_core::{render::render_page, Article, Category, Stats, ALL_CATEGORY_ID};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use crate::error::{WebError, WebResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ArticlesQuery {
    pub category: Option<String>,
}

pub async fn index(State(state): State<Arc<AppState>>) -> WebResult<Html<String>> {
    let display = state.display.read().await;
    Ok(Html(render_page(&display, state.navigation.as_ref())?))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticlesQuery>,
) -> WebResult<Json<Vec<Article>>> {
    let display = state.display.read().await;
    let store = display.store().ok_or_else(|| WebError::not_ready(&display))?;
    let category = query.category.as_deref().unwrap_or(ALL_CATEGORY_ID);
    Ok(Json(store.by_category(category).into_iter().cloned().collect()))
}

pub async fn featured_articles(State(state): State<Arc<AppState>>) -> WebResult<Json<Vec<Article>>> {
    let display = state.display.read().await;
    let store = display.store().ok_or_else(|| WebError::not_ready(&display))?;
    Ok(Json(store.featured().to_vec()))
}

pub async fn latest_articles(State(state): State<Arc<AppState>>) -> WebResult<Json<Vec<Article>>> {
    let display = state.display.read().await;
    let store = display.store().ok_or_else(|| WebError::not_ready(&display))?;
    Ok(Json(store.latest().to_vec()))
}

pub async fn list_categories() -> impl IntoResponse {
    Json(Category::all())
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> WebResult<Json<Stats>> {
    let display = state.display.read().await;
    let store = display.store().ok_or_else(|| WebError::not_ready(&display))?;
    Ok(Json(store.stats()))
}
