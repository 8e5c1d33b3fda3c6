//! Defines the category store trait.

use crate::{
    Error,
    category::{Category, CategoryId, NewCategory},
};

/// Creates, retrieves and deletes budget categories.
pub trait CategoryStore {
    /// Create a new category and add it to the store.
    ///
    /// The store assigns a unique ID and sets the spent amount to zero.
    fn create(&self, new_category: NewCategory) -> Result<Category, Error>;

    /// Get all categories in the order they were created.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Delete the category with `category_id`.
    ///
    /// Returns `false` if there was no such category.
    fn delete(&self, category_id: CategoryId) -> Result<bool, Error>;
}
