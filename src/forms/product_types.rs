use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product_type::NewProductType;
use crate::domain::types::{ProductTypeDescription, ProductTypeName, TypeConstraintError};
use crate::forms::FieldErrors;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct AddProductTypeForm {
    #[serde(default)]
    #[validate(length(
        min = 2,
        message = "اسم نوع المنتج مطلوب ويجب أن يكون حرفين على الأقل"
    ))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl AddProductTypeForm {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddProductTypeFormPayload {
    pub name: ProductTypeName,
    pub description: Option<ProductTypeDescription>,
}

impl AddProductTypeFormPayload {
    pub fn into_new_product_type(self) -> NewProductType {
        let now = Utc::now().naive_utc();
        NewProductType {
            name: self.name,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddProductTypeFormError {
    #[error("Add product type form validation failed: {0}")]
    Validation(FieldErrors),
    #[error("Add product type form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl AddProductTypeFormError {
    /// Per-field messages to render next to the inputs.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Validation(errors) => errors.clone(),
            Self::TypeConstraint(_) => FieldErrors::default(),
        }
    }
}

impl From<ValidationErrors> for AddProductTypeFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.into())
    }
}

impl From<TypeConstraintError> for AddProductTypeFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddProductTypeForm> for AddProductTypeFormPayload {
    type Error = AddProductTypeFormError;

    fn try_from(value: AddProductTypeForm) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;

        Ok(Self {
            name: ProductTypeName::new(value.name)?,
            description: ProductTypeDescription::new_optional(value.description),
        })
    }
}
