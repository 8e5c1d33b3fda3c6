//! Category deletion endpoint.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{CategoryId, CategoryService, CategoryStore},
};

/// The JSON body sent after a delete request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true`, failures are sent as an error message instead.
    pub success: bool,
    #[allow(missing_docs)]
    pub message: String,
}

/// Handle category deletion.
///
/// Responds with success whether or not the category existed, see
/// [CategoryService::delete].
pub async fn delete_category_endpoint<S>(
    State(service): State<CategoryService<S>>,
    category_id: Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<DeleteResponse>, Error>
where
    S: CategoryStore + Clone + Send + Sync + 'static,
{
    let Path(category_id) =
        category_id.map_err(|rejection| Error::InvalidCategoryId(rejection.body_text()))?;

    service.delete(category_id)?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Category deleted successfully".to_owned(),
    }))
}

#[cfg(test)]
mod delete_category_endpoint_tests {
    use axum::{
        Json,
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };

    use crate::{
        category::{CategoryName, CategoryService, NewCategory, delete_category_endpoint},
        test_utils::{FailingCategoryStore, FakeCategoryStore},
    };

    fn get_test_service() -> CategoryService<FakeCategoryStore> {
        CategoryService::new(FakeCategoryStore::default())
    }

    #[tokio::test]
    async fn delete_category_endpoint_succeeds() {
        let service = get_test_service();
        let category = service
            .create(NewCategory {
                category_name: CategoryName::new_unchecked("Test Category"),
                allocated_amount: 10.0,
                description: String::new(),
            })
            .expect("Could not create test category");

        let Json(response) = delete_category_endpoint(State(service.clone()), Ok(Path(category.id)))
            .await
            .expect("Could not delete category");

        assert!(response.success);
        assert_eq!(response.message, "Category deleted successfully");
        assert_eq!(service.list_all(), Ok(vec![]));
    }

    #[tokio::test]
    async fn delete_missing_category_succeeds() {
        let service = get_test_service();

        let first = delete_category_endpoint(State(service.clone()), Ok(Path(999999)))
            .await
            .expect("Could not delete category");
        let second = delete_category_endpoint(State(service), Ok(Path(999999)))
            .await
            .expect("Could not delete category");

        assert_eq!(first.0, second.0);
        assert!(first.0.success);
    }

    #[tokio::test]
    async fn delete_store_failure_is_internal_server_error() {
        let service = CategoryService::new(FailingCategoryStore);

        let response = delete_category_endpoint(State(service), Ok(Path(1)))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
