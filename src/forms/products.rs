use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::NewProduct;
use crate::domain::types::{
    CategoryId, ProductBarcode, ProductDescription, ProductName, ProductSku, ProductTypeId,
    ProductUnit, TypeConstraintError,
};
use crate::forms::FieldErrors;

/// Unit preselected on a blank product form ("piece").
pub const DEFAULT_UNIT: &str = "قطعة";

const CATEGORY_REQUIRED: &str = "يرجى اختيار تصنيف";
const PRODUCT_TYPE_REQUIRED: &str = "يرجى اختيار نوع المنتج";

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AddProductForm {
    #[serde(default)]
    #[validate(length(min = 3, message = "اسم المنتج مطلوب ويجب أن يكون 3 أحرف على الأقل"))]
    pub name: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default)]
    pub description: String,
    /// Checked when parsed into a [`CategoryId`].
    #[serde(default)]
    pub category_id: String,
    /// Checked when parsed into a [`ProductTypeId`].
    #[serde(default)]
    pub product_type_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "وحدة القياس مطلوبة"))]
    pub unit: String,
}

impl Default for AddProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            barcode: String::new(),
            description: String::new(),
            category_id: String::new(),
            product_type_id: String::new(),
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl AddProductForm {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            barcode: self.barcode.trim().to_string(),
            description: self.description.trim().to_string(),
            category_id: self.category_id.trim().to_string(),
            product_type_id: self.product_type_id.trim().to_string(),
            unit: self.unit.trim().to_string(),
        }
    }
}

/// Validated product form. The SKU is derived later, once reference data is
/// available.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProductFormPayload {
    pub name: ProductName,
    pub barcode: Option<ProductBarcode>,
    pub description: Option<ProductDescription>,
    pub category_id: CategoryId,
    pub product_type_id: ProductTypeId,
    pub unit: ProductUnit,
}

impl AddProductFormPayload {
    pub fn into_new_product(self, sku: ProductSku) -> NewProduct {
        let now = Utc::now().naive_utc();
        NewProduct {
            name: self.name,
            sku,
            barcode: self.barcode,
            description: self.description,
            category_id: self.category_id,
            product_type_id: self.product_type_id,
            unit: self.unit,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddProductFormError {
    #[error("Add product form validation failed: {0}")]
    Validation(FieldErrors),
    #[error("Add product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl AddProductFormError {
    /// Per-field messages to render next to the inputs.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Validation(errors) => errors.clone(),
            Self::TypeConstraint(_) => FieldErrors::default(),
        }
    }
}

impl From<ValidationErrors> for AddProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.into())
    }
}

impl From<TypeConstraintError> for AddProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddProductForm> for AddProductFormPayload {
    type Error = AddProductFormError;

    fn try_from(value: AddProductForm) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        let mut errors = match value.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => e.into(),
        };

        // An empty select and a non-id value get the same "please choose" error.
        let category_id = CategoryId::parse(&value.category_id);
        if category_id.is_err() {
            errors.insert("category_id", CATEGORY_REQUIRED);
        }
        let product_type_id = ProductTypeId::parse(&value.product_type_id);
        if product_type_id.is_err() {
            errors.insert("product_type_id", PRODUCT_TYPE_REQUIRED);
        }

        if !errors.is_empty() {
            return Err(AddProductFormError::Validation(errors));
        }

        Ok(Self {
            name: ProductName::new(value.name)?,
            barcode: ProductBarcode::new_optional(value.barcode),
            description: ProductDescription::new_optional(value.description),
            category_id: category_id?,
            product_type_id: product_type_id?,
            unit: ProductUnit::new(value.unit)?,
        })
    }
}
