//! Endpoints for listing categories and the budget summary.

use axum::{Json, extract::State};

use crate::{
    Error,
    category::{Category, CategoryService, CategoryStore, CategorySummary},
};

/// Get all categories as JSON, oldest first.
pub async fn list_categories_endpoint<S>(
    State(service): State<CategoryService<S>>,
) -> Result<Json<Vec<Category>>, Error>
where
    S: CategoryStore + Clone + Send + Sync + 'static,
{
    service.list_all().map(Json)
}

/// Get the remaining amount for each category as JSON.
pub async fn get_summary_endpoint<S>(
    State(service): State<CategoryService<S>>,
) -> Result<Json<Vec<CategorySummary>>, Error>
where
    S: CategoryStore + Clone + Send + Sync + 'static,
{
    service.summarize().map(Json)
}
