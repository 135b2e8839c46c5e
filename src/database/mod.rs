pub mod result_store;
pub mod store;
