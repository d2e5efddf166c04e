pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod results;
pub mod upload;
