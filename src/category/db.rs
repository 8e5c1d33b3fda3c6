//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName, CategoryStore, NewCategory},
};

/// Creates, retrieves and deletes categories in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    ///
    /// The category table must already exist, see [create_category_table].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::StoreFailure(format!("could not acquire the database lock: {error}"))
        })
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Insert a category into the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, new_category: NewCategory) -> Result<Category, Error> {
        let connection = self.lock()?;
        connection.execute(
            "INSERT INTO category (name, allocated_amount, description, spent_amount)
            VALUES (?1, ?2, ?3, 0);",
            (
                new_category.category_name.as_ref(),
                new_category.allocated_amount,
                &new_category.description,
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Category {
            id,
            category_name: new_category.category_name,
            allocated_amount: new_category.allocated_amount,
            description: new_category.description,
            spent_amount: 0.0,
        })
    }

    /// Retrieve all categories in the database, oldest first.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error or a row
    /// holds a value of the wrong type.
    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.lock()?
            .prepare(
                "SELECT id, name, allocated_amount, description, spent_amount
                FROM category ORDER BY id ASC;",
            )?
            .query_map([], map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    /// Delete a category by ID.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn delete(&self, category_id: CategoryId) -> Result<bool, Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM category WHERE id = ?1", [category_id])?;

        Ok(rows_affected > 0)
    }
}

/// Initialize the category table.
///
/// `AUTOINCREMENT` stops the IDs of deleted categories from being handed out
/// again.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            allocated_amount REAL NOT NULL,
            description TEXT NOT NULL,
            spent_amount REAL DEFAULT 0
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let allocated_amount = row.get(2)?;
    let description = row.get(3)?;
    // The column is nullable, but a non-numeric value is still an error.
    let spent_amount: Option<f64> = row.get(4)?;

    Ok(Category {
        id,
        category_name: CategoryName::new_unchecked(&raw_name),
        allocated_amount,
        description,
        spent_amount: spent_amount.unwrap_or(0.0),
    })
}
