//! A personal budget tracker.
//!
//! Budget categories are created with an allocated amount, and the API
//! reports how much of each allocation is left after spending.
//!
//! This library provides a JSON REST API for managing the categories.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
mod db;
pub mod endpoints;
mod error;
mod logging;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, SQLAppState, create_app_state};
pub use category::{
    Category, CategoryData, CategoryId, CategoryName, CategoryService, CategoryStore,
    CategorySummary, DeleteResponse, NewCategory, SQLiteCategoryStore,
};
pub use db::initialize as initialize_db;
pub use error::{Error, ErrorMessage};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}
