//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    category::{CategoryService, CategoryStore, SQLiteCategoryStore},
    db::initialize,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    /// The budget logic, backed by a [CategoryStore].
    pub category_service: CategoryService<S>,
}

impl<S> AppState<S>
where
    S: CategoryStore,
{
    /// Create a new [AppState] that stores categories in `category_store`.
    pub fn new(category_store: S) -> Self {
        Self {
            category_service: CategoryService::new(category_store),
        }
    }
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteCategoryStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(SQLiteCategoryStore::new(connection)))
}

impl<S> FromRef<AppState<S>> for CategoryService<S>
where
    S: Clone,
{
    fn from_ref(state: &AppState<S>) -> Self {
        state.category_service.clone()
    }
}
