pub mod bulk;
pub mod error;
pub mod filters;
pub mod fixtures;
pub mod model;
pub mod upload;
pub mod verification;
