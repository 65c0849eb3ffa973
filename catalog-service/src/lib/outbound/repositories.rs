pub mod product;
pub mod store;
pub mod user;

pub use store::PostgresRecordStore;
