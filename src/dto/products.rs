use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::reference::ReferenceData;

/// Product row of the listing page with its category and type resolved to
/// names. Unknown references render as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub product_type: Option<String>,
    pub unit: String,
}

impl ProductDto {
    pub fn new(product: Product, reference: &ReferenceData) -> Self {
        Self {
            id: product.id.get(),
            category: reference
                .category_name(product.category_id)
                .map(|name| name.to_string()),
            product_type: reference
                .product_type_name(product.product_type_id)
                .map(|name| name.to_string()),
            name: product.name.into_inner(),
            sku: product.sku.into_inner(),
            barcode: product.barcode.map(String::from),
            description: product.description.map(String::from),
            unit: product.unit.into_inner(),
        }
    }
}
