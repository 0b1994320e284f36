pub mod batch;
pub mod summary;
