//! The budget logic that sits between the HTTP handlers and a [CategoryStore].

use crate::{
    Error,
    category::{Category, CategoryId, CategoryStore, CategorySummary, NewCategory},
};

/// Creates, lists, summarizes and deletes budget categories.
///
/// The service does not validate its inputs, callers are expected to have
/// done so already.
#[derive(Debug, Clone)]
pub struct CategoryService<S> {
    store: S,
}

impl<S> CategoryService<S>
where
    S: CategoryStore,
{
    /// Create a service that reads and writes categories via `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a category with nothing spent yet.
    ///
    /// # Errors
    /// Returns [Error::StoreFailure] if the category could not be saved.
    pub fn create(&self, new_category: NewCategory) -> Result<Category, Error> {
        let category = self.store.create(new_category)?;
        tracing::debug!("Created category {}: {}", category.id, category.category_name);

        Ok(category)
    }

    /// Get every category, oldest first.
    ///
    /// # Errors
    /// Returns [Error::StoreFailure] if the categories could not be read.
    pub fn list_all(&self) -> Result<Vec<Category>, Error> {
        self.store.get_all()
    }

    /// Get every category along with how much of its allocation is left.
    ///
    /// The order matches [CategoryService::list_all]. Overspent categories
    /// have a negative remaining amount.
    ///
    /// # Errors
    /// Returns [Error::StoreFailure] if the categories could not be read.
    pub fn summarize(&self) -> Result<Vec<CategorySummary>, Error> {
        Ok(self
            .store
            .get_all()?
            .into_iter()
            .map(CategorySummary::from)
            .collect())
    }

    /// Delete the category with `category_id`.
    ///
    /// Deleting a category that does not exist is **not** an error: the
    /// result is the same as deleting an existing one, so repeated deletes
    /// of the same ID all succeed.
    ///
    /// # Errors
    /// Returns [Error::StoreFailure] only if the store itself fails.
    pub fn delete(&self, category_id: CategoryId) -> Result<(), Error> {
        if !self.store.delete(category_id)? {
            tracing::debug!("Tried to delete category {category_id}, which does not exist");
        }

        Ok(())
    }
}

#[cfg(test)]
mod category_service_tests {
    use crate::{
        Error,
        category::{Category, CategoryName, CategoryService, CategoryStore, NewCategory},
        test_utils::{FailingCategoryStore, FakeCategoryStore},
    };

    fn new_category(name: &str, allocated_amount: f64, description: &str) -> NewCategory {
        NewCategory {
            category_name: CategoryName::new_unchecked(name),
            allocated_amount,
            description: description.to_owned(),
        }
    }

    fn get_test_service() -> (CategoryService<FakeCategoryStore>, FakeCategoryStore) {
        let store = FakeCategoryStore::default();

        (CategoryService::new(store.clone()), store)
    }

    #[test]
    fn list_all_on_empty_store_is_empty() {
        let (service, _) = get_test_service();

        assert_eq!(service.list_all(), Ok(vec![]));
        assert_eq!(service.summarize(), Ok(vec![]));
    }

    #[test]
    fn create_adds_exactly_one_category_with_nothing_spent() {
        let (service, _) = get_test_service();
        service.create(new_category("Rent", 1200.0, "")).unwrap();
        let before = service.list_all().unwrap();

        let created = service
            .create(new_category("Groceries", 500.0, "Food"))
            .expect("Could not create category");

        let after = service.list_all().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last(), Some(&created));
        assert_eq!(created.category_name.as_ref(), "Groceries");
        assert_eq!(created.allocated_amount, 500.0);
        assert_eq!(created.description, "Food");
        assert_eq!(created.spent_amount, 0.0);
    }

    #[test]
    fn create_persists_values_as_given() {
        let (service, _) = get_test_service();

        let created = service.create(new_category(" Misc ", -10.0, "")).unwrap();

        assert_eq!(created.category_name.as_ref(), " Misc ");
        assert_eq!(created.allocated_amount, -10.0);
    }

    #[test]
    fn summary_of_new_category_has_full_amount_remaining() {
        let (service, _) = get_test_service();
        service
            .create(new_category("Groceries", 500.0, "Food"))
            .unwrap();

        let summary = service.summarize().unwrap();

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].category_name.as_ref(), "Groceries");
        assert_eq!(summary[0].allocated_amount, 500.0);
        assert_eq!(summary[0].spent_amount, 0.0);
        assert_eq!(summary[0].remaining_amount, 500.0);
    }

    #[test]
    fn summary_remaining_is_allocated_minus_spent_for_every_category() {
        let (service, store) = get_test_service();
        store.insert(Category {
            id: 10,
            category_name: CategoryName::new_unchecked("Shopping"),
            allocated_amount: 400.0,
            description: String::new(),
            spent_amount: 50.0,
        });
        store.insert(Category {
            id: 11,
            category_name: CategoryName::new_unchecked("Eating Out"),
            allocated_amount: 300.0,
            description: String::new(),
            spent_amount: 400.0,
        });

        let categories = service.list_all().unwrap();
        let summary = service.summarize().unwrap();

        assert_eq!(summary.len(), categories.len());
        for (category, view) in categories.iter().zip(&summary) {
            assert_eq!(view.id, category.id);
            assert_eq!(
                view.remaining_amount,
                category.allocated_amount - category.spent_amount
            );
        }
        assert_eq!(summary[0].remaining_amount, 350.0);
        assert_eq!(summary[1].remaining_amount, -100.0);
    }

    #[test]
    fn summary_preserves_creation_order() {
        let (service, _) = get_test_service();
        service.create(new_category("Travel", 1000.0, "")).unwrap();
        service.create(new_category("Health", 300.0, "")).unwrap();

        let names: Vec<String> = service
            .summarize()
            .unwrap()
            .into_iter()
            .map(|summary| summary.category_name.to_string())
            .collect();

        assert_eq!(names, vec!["Travel", "Health"]);
    }

    #[test]
    fn delete_removes_only_that_category() {
        let (service, _) = get_test_service();
        let keep = service.create(new_category("Keep", 1.0, "")).unwrap();
        let remove = service.create(new_category("Remove", 2.0, "")).unwrap();

        let result = service.delete(remove.id);

        assert_eq!(result, Ok(()));
        assert_eq!(service.list_all(), Ok(vec![keep]));
    }

    #[test]
    fn delete_missing_category_succeeds_without_changes() {
        let (service, _) = get_test_service();
        let keep = service.create(new_category("Keep", 1.0, "")).unwrap();

        let result = service.delete(keep.id + 9999);

        assert_eq!(result, Ok(()));
        assert_eq!(service.list_all(), Ok(vec![keep]));
    }

    #[test]
    fn delete_twice_gives_same_result() {
        let (service, _) = get_test_service();
        let category = service.create(new_category("Once", 1.0, "")).unwrap();

        let first = service.delete(category.id);
        let second = service.delete(category.id);

        assert_eq!(first, second);
        assert_eq!(service.list_all(), Ok(vec![]));
    }

    #[test]
    fn store_failures_are_passed_through() {
        let service = CategoryService::new(FailingCategoryStore);

        assert_store_failure(service.create(new_category("Rent", 1.0, "")));
        assert_store_failure(service.list_all());
        assert_store_failure(service.summarize());
        assert_store_failure(service.delete(1));
    }

    #[track_caller]
    fn assert_store_failure<T: std::fmt::Debug>(result: Result<T, Error>) {
        match result {
            Err(Error::StoreFailure(message)) => {
                assert_eq!(message, FailingCategoryStore::MESSAGE)
            }
            other => panic!("want store failure, got {other:?}"),
        }
    }

    #[test]
    fn fake_store_assigns_unique_ids() {
        let store = FakeCategoryStore::default();

        let first = store.create(new_category("A", 1.0, "")).unwrap();
        let second = store.create(new_category("B", 1.0, "")).unwrap();

        assert_ne!(first.id, second.id);
    }
}
