//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Database identifier for a category.
pub type CategoryId = i64;

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// The name is stored exactly as given, surrounding whitespace included.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// empty or only contains whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.trim().is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A budget bucket, e.g. 'Groceries' with $500 allocated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Generated by the store, never reused.
    pub id: CategoryId,
    /// The label shown to the user.
    pub category_name: CategoryName,
    /// How much can be spent in this category.
    pub allocated_amount: f64,
    /// Free text, may be empty.
    pub description: String,
    /// How much has been spent so far.
    pub spent_amount: f64,
}

/// The details needed to add a category to a store.
///
/// The store generates the ID and starts the spent amount at zero.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct NewCategory {
    pub category_name: CategoryName,
    pub allocated_amount: f64,
    pub description: String,
}

/// A read-only view of a category with the amount left to spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub category_name: CategoryName,
    pub allocated_amount: f64,
    pub description: String,
    pub spent_amount: f64,
    /// Negative when more has been spent than was allocated.
    pub remaining_amount: f64,
}

impl From<Category> for CategorySummary {
    fn from(category: Category) -> Self {
        Self {
            remaining_amount: category.allocated_amount - category.spent_amount,
            id: category.id,
            category_name: category.category_name,
            allocated_amount: category.allocated_amount,
            description: category.description,
            spent_amount: category.spent_amount,
        }
    }
}

/// The JSON body for creating a category.
///
/// Missing fields fall back to an empty name, a zero amount and an empty
/// description so that validation can report a useful message.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CategoryData {
    pub category_name: String,
    pub allocated_amount: f64,
    pub description: String,
}

impl TryFrom<CategoryData> for NewCategory {
    type Error = Error;

    fn try_from(data: CategoryData) -> Result<Self, Self::Error> {
        let category_name = CategoryName::new(&data.category_name)?;

        if data.allocated_amount < 0.0 {
            return Err(Error::NegativeAllocatedAmount(data.allocated_amount));
        }

        Ok(Self {
            category_name,
            allocated_amount: data.allocated_amount,
            description: data.description,
        })
    }
}
