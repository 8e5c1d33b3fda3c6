//! Category stores for testing code that sits on top of [CategoryStore].

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryStore, NewCategory},
};

/// An in-memory store that keeps categories in insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeCategoryStore {
    // Use Arc Mutex so that clones of the store share state and can be passed into async route
    // handlers.
    categories: Arc<Mutex<Vec<Category>>>,
    next_id: Arc<Mutex<CategoryId>>,
}

impl FakeCategoryStore {
    /// Add `category` as-is, bypassing ID generation and the zero spent amount.
    pub(crate) fn insert(&self, category: Category) {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(category.id);

        self.categories.lock().unwrap().push(category);
    }
}

impl CategoryStore for FakeCategoryStore {
    fn create(&self, new_category: NewCategory) -> Result<Category, Error> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let category = Category {
            id: *next_id,
            category_name: new_category.category_name,
            allocated_amount: new_category.allocated_amount,
            description: new_category.description,
            spent_amount: 0.0,
        };
        self.categories.lock().unwrap().push(category.clone());

        Ok(category)
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        Ok(self.categories.lock().unwrap().clone())
    }

    fn delete(&self, category_id: CategoryId) -> Result<bool, Error> {
        let mut categories = self.categories.lock().unwrap();
        let count_before = categories.len();
        categories.retain(|category| category.id != category_id);

        Ok(categories.len() < count_before)
    }
}

/// A store that fails every operation, as if the database were unreachable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingCategoryStore;

impl FailingCategoryStore {
    pub(crate) const MESSAGE: &'static str = "connection to the database was lost";

    fn error() -> Error {
        Error::StoreFailure(Self::MESSAGE.to_owned())
    }
}

impl CategoryStore for FailingCategoryStore {
    fn create(&self, _new_category: NewCategory) -> Result<Category, Error> {
        Err(Self::error())
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        Err(Self::error())
    }

    fn delete(&self, _category_id: CategoryId) -> Result<bool, Error> {
        Err(Self::error())
    }
}
