pub mod inspection;
pub mod upload;
