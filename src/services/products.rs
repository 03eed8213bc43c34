use rand::Rng;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::reference::ReferenceData;
use crate::domain::sku::generate_sku;
use crate::domain::submission::FormSubmission;
use crate::dto::products::ProductDto;
use crate::forms::products::AddProductFormPayload;
use crate::repository::{CategoryReader, ProductReader, ProductTypeReader, ProductWriter};

use super::{ServiceError, ServiceResult, ensure_access, insert_failure_message};

/// Listing page the form redirects to after a successful insert.
pub const PRODUCTS_URL: &str = "/dashboard/products";

const CREATE_FAILED: &str = "حدث خطأ أثناء إنشاء المنتج";

/// Loads categories and product types, each ordered by name.
///
/// A failed read is logged and both lists are left empty; the form still
/// renders, just with empty selects.
pub fn load_reference_data<R>(repo: &R) -> ReferenceData
where
    R: CategoryReader + ProductTypeReader,
{
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to load categories: {e}");
            return ReferenceData::default();
        }
    };

    match repo.list_product_types() {
        Ok(product_types) => ReferenceData::new(categories, product_types),
        Err(e) => {
            log::error!("Failed to load product types: {e}");
            ReferenceData::default()
        }
    }
}

/// Reference data for the blank "add product" form.
pub fn show_add_product_form<R>(
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<ReferenceData>
where
    R: CategoryReader + ProductTypeReader,
{
    ensure_access(user)?;
    Ok(load_reference_data(repo))
}

/// Derives a SKU and inserts the product.
///
/// Returns the submission outcome together with the reference data used for
/// the SKU, so a failed submission can re-render the form without another
/// round trip.
pub fn add_product<R, G>(
    payload: AddProductFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
    rng: &mut G,
) -> ServiceResult<(FormSubmission, ReferenceData)>
where
    R: CategoryReader + ProductTypeReader + ProductWriter,
    G: Rng + ?Sized,
{
    ensure_access(user)?;

    let mut submission = FormSubmission::new();
    submission.begin()?;

    let reference = load_reference_data(repo);
    let sku = generate_sku(
        &payload.name,
        payload.category_id,
        payload.product_type_id,
        &reference,
        rng,
    )?;
    log::debug!("Generated SKU {sku} for product '{}'", payload.name);

    let product = payload.into_new_product(sku);
    match repo.create_product(&product) {
        Ok(_) => submission.succeed(PRODUCTS_URL),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            submission.fail(insert_failure_message(&e, CREATE_FAILED));
        }
    }

    Ok((submission, reference))
}

pub fn show_products<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: CategoryReader + ProductTypeReader + ProductReader,
{
    ensure_access(user)?;

    let products = match repo.list_products() {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to list products: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let reference = load_reference_data(repo);
    Ok(products
        .into_iter()
        .map(|product| ProductDto::new(product, &reference))
        .collect())
}
