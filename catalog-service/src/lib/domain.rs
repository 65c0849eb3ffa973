pub mod product;
pub mod record;
pub mod user;
