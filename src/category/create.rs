//! Category creation endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    Error,
    category::{Category, CategoryData, CategoryService, CategoryStore, NewCategory},
};

/// Handle category creation. Returns the new category as JSON.
///
/// The body is checked here rather than in the service: the name must not be
/// blank and the allocated amount must not be negative.
pub async fn create_category_endpoint<S>(
    State(service): State<CategoryService<S>>,
    body: Result<Json<CategoryData>, JsonRejection>,
) -> Result<Json<Category>, Error>
where
    S: CategoryStore + Clone + Send + Sync + 'static,
{
    let Json(data) = body.map_err(|rejection| Error::InvalidRequestBody(rejection.body_text()))?;
    let new_category = NewCategory::try_from(data)?;

    service.create(new_category).map(Json)
}
