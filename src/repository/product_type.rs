use diesel::prelude::*;

use crate::domain::product_type::{NewProductType, ProductType};
use crate::models::product_type::{
    NewProductType as DbNewProductType, ProductType as DbProductType,
};
use crate::repository::{DieselRepository, ProductTypeReader, ProductTypeWriter, RepositoryResult};

impl ProductTypeReader for DieselRepository {
    fn list_product_types(&self) -> RepositoryResult<Vec<ProductType>> {
        use crate::schema::product_types;

        let mut conn = self.conn()?;

        let items = product_types::table
            .order(product_types::name.asc())
            .load::<DbProductType>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ProductType>, _>>()?;

        Ok(items)
    }
}

impl ProductTypeWriter for DieselRepository {
    fn create_product_type(&self, product_type: &NewProductType) -> RepositoryResult<usize> {
        use crate::schema::product_types;

        let mut conn = self.conn()?;
        let db_product_type: DbNewProductType = product_type.clone().into();

        let affected = diesel::insert_into(product_types::table)
            .values(db_product_type)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
