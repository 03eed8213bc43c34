use crate::domain::auth::AuthenticatedUser;
use crate::domain::submission::FormSubmission;
use crate::dto::product_types::ProductTypeDto;
use crate::forms::product_types::AddProductTypeFormPayload;
use crate::repository::{ProductTypeReader, ProductTypeWriter};

use super::{ServiceError, ServiceResult, ensure_access, insert_failure_message};

/// Listing page the form redirects to after a successful insert.
pub const PRODUCT_TYPES_URL: &str = "/dashboard/product-types";

const CREATE_FAILED: &str = "حدث خطأ أثناء إنشاء نوع المنتج";

pub fn show_product_types<R>(
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Vec<ProductTypeDto>>
where
    R: ProductTypeReader,
{
    ensure_access(user)?;

    match repo.list_product_types() {
        Ok(product_types) => Ok(product_types
            .into_iter()
            .map(ProductTypeDto::from)
            .collect()),
        Err(e) => {
            log::error!("Failed to list product types: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Checks access to the blank "add product type" form.
pub fn show_add_product_type_form(user: &AuthenticatedUser) -> ServiceResult<()> {
    ensure_access(user)
}

/// Inserts a product type.
///
/// Insert failures are not service errors: they are recorded on the returned
/// [`FormSubmission`] so the page can show them and accept a resubmission.
pub fn add_product_type<R>(
    payload: AddProductTypeFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<FormSubmission>
where
    R: ProductTypeWriter,
{
    ensure_access(user)?;

    let mut submission = FormSubmission::new();
    submission.begin()?;

    let product_type = payload.into_new_product_type();
    match repo.create_product_type(&product_type) {
        Ok(_) => submission.succeed(PRODUCT_TYPES_URL),
        Err(e) => {
            log::error!("Failed to create product type: {e}");
            submission.fail(insert_failure_message(&e, CREATE_FAILED));
        }
    }

    Ok(submission)
}
