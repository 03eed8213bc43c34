use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::product::{NewProduct, Product};
use crate::domain::product_type::{NewProductType, ProductType};

pub mod category;
pub mod errors;
pub mod product;
pub mod product_type;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Read-only operations for product type entities.
pub trait ProductTypeReader {
    /// List all product types ordered by name.
    fn list_product_types(&self) -> RepositoryResult<Vec<ProductType>>;
}

/// Write operations for product type entities.
pub trait ProductTypeWriter {
    /// Persist a new product type.
    fn create_product_type(&self, product_type: &NewProductType) -> RepositoryResult<usize>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List all products ordered by name.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<usize>;
}
