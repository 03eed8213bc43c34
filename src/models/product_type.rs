use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_type::{
    NewProductType as DomainNewProductType, ProductType as DomainProductType,
};
use crate::domain::types::{ProductTypeDescription, ProductTypeName, TypeConstraintError};

/// Diesel model representing the `product_types` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::product_types)]
pub struct ProductType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`ProductType`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_types)]
pub struct NewProductType {
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ProductType> for DomainProductType {
    type Error = TypeConstraintError;

    fn try_from(product_type: ProductType) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product_type.id.try_into()?,
            name: ProductTypeName::new(product_type.name)?,
            description: product_type
                .description
                .and_then(ProductTypeDescription::new_optional),
            created_at: product_type.created_at,
            updated_at: product_type.updated_at,
        })
    }
}

impl From<DomainNewProductType> for NewProductType {
    fn from(product_type: DomainNewProductType) -> Self {
        Self {
            name: product_type.name.into_inner(),
            description: product_type.description.map(String::from),
            created_at: product_type.created_at,
            updated_at: product_type.updated_at,
        }
    }
}
