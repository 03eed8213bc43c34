use std::cell::{Cell, RefCell};

use crate::domain::category::Category;
use crate::domain::product::{NewProduct, Product};
use crate::domain::product_type::{NewProductType, ProductType};
use crate::repository::{
    CategoryReader, ProductReader, ProductTypeReader, ProductTypeWriter, ProductWriter,
    RepositoryError, RepositoryResult,
};

/// Simple in-memory repository used for unit tests.
///
/// Records every insert it receives and can be told to fail reads or writes.
#[derive(Default)]
pub struct TestRepository {
    categories: Vec<Category>,
    product_types: Vec<ProductType>,
    products: Vec<Product>,
    fail_reads: bool,
    fail_product_type_reads: bool,
    fail_writes: bool,
    reads: Cell<usize>,
    created_product_types: RefCell<Vec<NewProductType>>,
    created_products: RefCell<Vec<NewProduct>>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, product_types: Vec<ProductType>) -> Self {
        Self {
            categories,
            product_types,
            ..Default::default()
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Fail only `list_product_types`; categories still load.
    pub fn failing_product_type_reads(mut self) -> Self {
        self.fail_product_type_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn created_product_types(&self) -> Vec<NewProductType> {
        self.created_product_types.borrow().clone()
    }

    pub fn created_products(&self) -> Vec<NewProduct> {
        self.created_products.borrow().clone()
    }

    fn read(&self) -> RepositoryResult<()> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads {
            return Err(RepositoryError::Database(diesel::result::Error::NotFound));
        }
        Ok(())
    }

    fn write(&self) -> RepositoryResult<()> {
        if self.fail_writes {
            return Err(RepositoryError::Database(
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    Box::new("UNIQUE constraint failed".to_string()),
                ),
            ));
        }
        Ok(())
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.read()?;
        let mut items = self.categories.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }
}

impl ProductTypeReader for TestRepository {
    fn list_product_types(&self) -> RepositoryResult<Vec<ProductType>> {
        self.read()?;
        if self.fail_product_type_reads {
            return Err(RepositoryError::Database(diesel::result::Error::NotFound));
        }
        let mut items = self.product_types.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }
}

impl ProductTypeWriter for TestRepository {
    fn create_product_type(&self, product_type: &NewProductType) -> RepositoryResult<usize> {
        self.created_product_types
            .borrow_mut()
            .push(product_type.clone());
        self.write()?;
        Ok(1)
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        self.read()?;
        let mut items = self.products.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }
}

impl ProductWriter for TestRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<usize> {
        self.created_products.borrow_mut().push(product.clone());
        self.write()?;
        Ok(1)
    }
}
