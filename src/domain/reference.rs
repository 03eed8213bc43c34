//! Lookup lists backing the select inputs of the product form.

use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::product_type::ProductType;
use crate::domain::types::{CategoryId, CategoryName, ProductTypeId, ProductTypeName};

/// Categories and product types, each ordered by name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceData {
    pub categories: Vec<Category>,
    pub product_types: Vec<ProductType>,
}

impl ReferenceData {
    pub fn new(categories: Vec<Category>, product_types: Vec<ProductType>) -> Self {
        Self {
            categories,
            product_types,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.product_types.is_empty()
    }

    pub fn category_name(&self, id: CategoryId) -> Option<&CategoryName> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| &category.name)
    }

    pub fn product_type_name(&self, id: ProductTypeId) -> Option<&ProductTypeName> {
        self.product_types
            .iter()
            .find(|product_type| product_type.id == id)
            .map(|product_type| &product_type.name)
    }
}
