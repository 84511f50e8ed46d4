pub mod summary;
pub mod text;
