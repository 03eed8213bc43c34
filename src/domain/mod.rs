pub mod auth;
pub mod category;
pub mod product;
pub mod product_type;
pub mod reference;
pub mod sku;
pub mod submission;
pub mod types;
