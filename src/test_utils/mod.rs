#![allow(missing_docs)]

mod store;

pub(crate) use store::{FailingCategoryStore, FakeCategoryStore};
