//! Budget categories: the domain types, storage and HTTP endpoints.

mod create;
mod db;
mod delete;
mod domain;
mod list;
mod service;
mod store;

pub use create::create_category_endpoint;
pub use db::{SQLiteCategoryStore, create_category_table};
pub use delete::{DeleteResponse, delete_category_endpoint};
pub use domain::{Category, CategoryData, CategoryId, CategoryName, CategorySummary, NewCategory};
pub use list::{get_summary_endpoint, list_categories_endpoint};
pub use service::CategoryService;
pub use store::CategoryStore;
