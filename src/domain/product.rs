use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, ProductBarcode, ProductDescription, ProductId, ProductName, ProductSku,
    ProductTypeId, ProductUnit,
};

/// An inventory item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub sku: ProductSku,
    pub barcode: Option<ProductBarcode>,
    pub description: Option<ProductDescription>,
    pub category_id: CategoryId,
    pub product_type_id: ProductTypeId,
    pub unit: ProductUnit,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Product`].
///
/// The category and product type are trusted to exist: they come from the
/// select inputs of the product form and are not re-checked on insert.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub sku: ProductSku,
    pub barcode: Option<ProductBarcode>,
    pub description: Option<ProductDescription>,
    pub category_id: CategoryId,
    pub product_type_id: ProductTypeId,
    pub unit: ProductUnit,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
