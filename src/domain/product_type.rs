use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductTypeDescription, ProductTypeId, ProductTypeName};

/// Kind of product (e.g. "Gadget"), selectable when creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductType {
    pub id: ProductTypeId,
    pub name: ProductTypeName,
    pub description: Option<ProductTypeDescription>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`ProductType`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProductType {
    pub name: ProductTypeName,
    pub description: Option<ProductTypeDescription>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
