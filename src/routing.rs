//! Application router configuration.

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState,
    category::{
        CategoryStore, create_category_endpoint, delete_category_endpoint, get_summary_endpoint,
        list_categories_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// Requests from any origin are allowed so that the client can be served
/// from a different host.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: CategoryStore + Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::PUT])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint::<S>).post(create_category_endpoint::<S>),
        )
        .route(endpoints::CATEGORY_SUMMARY, get(get_summary_endpoint::<S>))
        .route(endpoints::CATEGORY, delete(delete_category_endpoint::<S>))
        .fallback(get_404_not_found)
        .layer(cors)
        .with_state(state)
}
