use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{
    ProductBarcode, ProductDescription, ProductName, ProductSku, ProductUnit, TypeConstraintError,
};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub description: Option<String>,
    pub category_id: i32,
    pub product_type_id: i32,
    pub unit: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub description: Option<String>,
    pub category_id: i32,
    pub product_type_id: i32,
    pub unit: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            sku: ProductSku::new(product.sku)?,
            barcode: product.barcode.and_then(ProductBarcode::new_optional),
            description: product.description.and_then(ProductDescription::new_optional),
            category_id: product.category_id.try_into()?,
            product_type_id: product.product_type_id.try_into()?,
            unit: ProductUnit::new(product.unit)?,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            sku: product.sku.into_inner(),
            barcode: product.barcode.map(String::from),
            description: product.description.map(String::from),
            category_id: product.category_id.get(),
            product_type_id: product.product_type_id.get(),
            unit: product.unit.into_inner(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
