use serde::Serialize;

use crate::domain::product_type::ProductType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductTypeDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<ProductType> for ProductTypeDto {
    fn from(value: ProductType) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            description: value.description.map(String::from),
        }
    }
}
